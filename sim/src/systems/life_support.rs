use super::types::StepDebug;
use crate::SubmarineState;

/// Oxygen budget for one tick.
///
/// With the main system up and a 2-of-3 quorum, the boat makes oxygen at an
/// efficiency that depends on how many sub-generators are running. The
/// emergency air supply is a weak fallback. With neither, the crew burns
/// through what is left, faster when the core is hot, narcosis is setting
/// in, or the air is not circulating.
pub(crate) fn update_life_support(sub: &mut SubmarineState, dt: f32, dbg: &mut StepDebug) {
    let quorum = sub.life_support_quorum();

    let rate = if sub.oxygen_system_active && quorum >= 2 {
        if quorum == 3 {
            2.2
        } else {
            1.8
        }
    } else if sub.emergency_air_supply_active {
        0.8
    } else {
        let mut consumption = 2.5 + sub.nitrogen_level * 0.3;
        if sub.reactor_temp > 200.0 {
            // Heat stress.
            consumption += (sub.reactor_temp - 200.0) / 100.0;
        }
        if !sub.air_circulation_active {
            // CO2 pooling without circulation.
            consumption *= 2.0;
        }
        -consumption
    };

    dbg.oxygen_rate = rate;
    sub.oxygen = (sub.oxygen + rate * dt).clamp(0.0, 100.0);
}
