use crate::{SimConfig, SubmarineState};

/// Manual cooling system: a strong, operator-run loop that drags the core
/// toward a stable band above ambient. Needs power plus at least one of the
/// coolant pumps or the emergency loop to move water through it.
pub(crate) fn update_manual_cooling(cfg: &SimConfig, sub: &mut SubmarineState, dt: f32) {
    if !sub.reactor_active {
        sub.cooling_active = false;
        return;
    }

    let powered = sub.powered(cfg.nav_power_threshold);
    let circulation = sub.coolant_pumps_active || sub.emergency_cooling_active;

    if sub.cooling_active && powered && circulation && !sub.reactor_destroyed {
        let cooling_power = if sub.emergency_cooling_active && sub.coolant_pumps_active {
            800.0
        } else if sub.emergency_cooling_active {
            650.0
        } else {
            500.0
        };

        // Holds the core at roughly water temperature + 95 °C.
        let target = sub.water_temperature + 95.0;
        if sub.reactor_temp > target {
            let rate = cooling_power + (sub.reactor_temp - target) * 2.0;
            sub.reactor_temp = (sub.reactor_temp - rate * dt).max(target);
        }
    } else if sub.cooling_active {
        // No power or nothing to circulate through: the loop drops out.
        sub.cooling_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hot_running_boat() -> (SimConfig, SubmarineState) {
        let cfg = SimConfig::default();
        let mut sub = SubmarineState::new(&cfg);
        sub.battery_level = 80.0;
        sub.reactor_active = true;
        sub.coolant_pumps_active = true;
        sub.cooling_active = true;
        sub.reactor_temp = 400.0;
        (cfg, sub)
    }

    #[test]
    fn holds_the_core_at_its_band() {
        let (cfg, mut sub) = hot_running_boat();
        for _ in 0..50 {
            update_manual_cooling(&cfg, &mut sub, 0.1);
        }
        let target = sub.water_temperature + 95.0;
        assert!((sub.reactor_temp - target).abs() < 1.0);
        assert!(sub.cooling_active);
    }

    #[test]
    fn drops_out_without_circulation() {
        let (cfg, mut sub) = hot_running_boat();
        sub.coolant_pumps_active = false;
        update_manual_cooling(&cfg, &mut sub, 0.1);
        assert!(!sub.cooling_active);
        assert_eq!(sub.reactor_temp, 400.0);
    }

    #[test]
    fn switches_off_with_the_reactor() {
        let (cfg, mut sub) = hot_running_boat();
        sub.reactor_active = false;
        update_manual_cooling(&cfg, &mut sub, 0.1);
        assert!(!sub.cooling_active);
    }
}
