use super::types::{StepDebug, StepEvents};
use crate::{SimConfig, SubmarineState};

/// Integrate core temperature and generation output for one tick.
///
/// Three thermal phases: cold start (fast fixed ramp below half of nominal),
/// nominal operation (base rate plus a temperature-proportional runaway
/// term), and decay heat once shut down or rodded. Cooling is additive
/// across the coolant pumps, the emergency loop and the manual cooling
/// system, each power-gated.
pub(crate) fn update_reactor(
    cfg: &SimConfig,
    sub: &mut SubmarineState,
    dt: f32,
    events: &mut StepEvents,
    dbg: &mut StepDebug,
) {
    if sub.reactor_destroyed {
        // Terminal: slag stays slag, and stays hot.
        sub.reactor_active = false;
        sub.reactor_power = 0.0;
        sub.reactor_temp = cfg.reactor_meltdown_temp + 100.0;
        return;
    }

    let powered = sub.powered(cfg.standard_power_threshold);

    let heating = if sub.reactor_active && !sub.control_rods_inserted {
        if sub.reactor_temp < cfg.reactor_nominal_temp * 0.5 {
            cfg.reactor_warmup_rate
        } else {
            cfg.reactor_base_heat_rate + sub.reactor_temp * cfg.reactor_runaway_factor
        }
    } else if sub.reactor_temp > 20.0 {
        // Decay heat: a previously hot core keeps producing.
        let decay_factor = (sub.reactor_temp / cfg.reactor_nominal_temp).max(0.1);
        cfg.reactor_residual_heat_rate * decay_factor
    } else {
        0.0
    };
    sub.reactor_temp += heating * dt;

    let mut cooling = 0.0;
    if sub.coolant_pumps_active && powered {
        cooling += cfg.reactor_pump_cool_rate;
    }
    if sub.emergency_cooling_active {
        cooling += cfg.reactor_emergency_cool_rate;
    }
    if sub.cooling_active {
        cooling += cfg.reactor_pump_cool_rate * 0.8;
    }
    sub.reactor_temp -= cooling * dt;

    // Passive dissipation into the surrounding water, and conduction into
    // the hull.
    sub.reactor_temp -= (sub.reactor_temp - sub.water_temperature) * 0.01 * dt;
    if sub.reactor_temp > sub.hull_temperature {
        sub.hull_temperature += (sub.reactor_temp - sub.hull_temperature) * 0.005 * dt;
    }
    sub.reactor_temp = sub.reactor_temp.max(sub.water_temperature);

    dbg.reactor_heating = heating;
    dbg.reactor_cooling = cooling;

    // Automatic scram: shutdown plus rod insertion, recoverable.
    if sub.reactor_active && sub.reactor_temp > cfg.reactor_scram_temp {
        sub.reactor_active = false;
        sub.control_rods_inserted = true;
        events.reactor_scram = true;
    }

    // Meltdown: terminal, with a one-time hull penalty.
    if sub.reactor_temp > cfg.reactor_meltdown_temp {
        sub.reactor_destroyed = true;
        sub.reactor_active = false;
        sub.hull_integrity = (sub.hull_integrity - cfg.meltdown_hull_damage).max(0.0);
        sub.reactor_temp = cfg.reactor_meltdown_temp + 100.0;
        sub.reactor_power = 0.0;
        events.reactor_meltdown = true;
        return;
    }

    // Generation needs the whole steam path up.
    if sub.reactor_active && sub.steam_generator_active && sub.power_turbine_active && powered {
        let efficiency = if sub.reactor_temp > cfg.reactor_critical_temp {
            0.3
        } else if sub.reactor_temp > cfg.reactor_warning_temp {
            0.7
        } else if sub.reactor_temp < 50.0 {
            0.2
        } else {
            1.0
        };
        // Full output well below nominal so a fresh start is useful early.
        let temp_factor = sub.reactor_temp / (cfg.reactor_nominal_temp * 0.7);
        sub.reactor_power = (temp_factor * 100.0 * efficiency).min(100.0);

        if sub.reactor_power > 10.0 {
            let charge = (sub.reactor_power / 100.0) * cfg.battery_charge_rate * dt;
            sub.battery_level = (sub.battery_level + charge).min(100.0);
        }
    } else {
        sub.reactor_power = 0.0;
    }
}
