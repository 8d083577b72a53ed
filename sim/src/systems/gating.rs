use crate::{SimConfig, SubmarineState, Subsystem};

/// Decide which subsystems are allowed to stay up this tick.
///
/// This pass only ever turns things off. Activation goes through
/// [`crate::Command`], so an operator flag that survives gating was both
/// requested and sustainable.
pub(crate) fn gate_subsystems(cfg: &SimConfig, sub: &mut SubmarineState) {
    let overheated = sub.reactor_temp > cfg.reactor_overheat_temp;

    if overheated && !sub.backup_power_active {
        // Runaway heat with no backup generator: the electrical bus is gone.
        for sys in Subsystem::ALL {
            if sys.power_threshold(cfg).is_some() {
                sys.set_active(sub, false);
            }
        }
        sub.oxygen_system_active = false;
        sub.autopilot_active = false;
        if sub.reactor_active {
            sub.reactor_active = false; // emergency shutdown
        }
    } else {
        for sys in Subsystem::ALL {
            if let Some(threshold) = sys.power_threshold(cfg) {
                if !sub.powered(threshold) {
                    sys.set_active(sub, false);
                }
            }
        }
        if !sub.powered(cfg.standard_power_threshold) {
            sub.oxygen_system_active = false;
        }
    }

    // Cascading shutdowns.

    // Running hot with no coolant flow scrams the plant.
    if sub.reactor_active && !sub.coolant_pumps_active && sub.reactor_temp > cfg.coolant_scram_temp {
        sub.reactor_active = false;
    }

    // Containment loss at temperature does too.
    if sub.reactor_active && !sub.containment_active && sub.reactor_temp > cfg.containment_scram_temp
    {
        sub.reactor_active = false;
    }

    // The main O2 system cannot run on fewer than two sub-generators.
    if sub.oxygen_system_active && sub.life_support_quorum() < 2 {
        sub.oxygen_system_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boat() -> (SimConfig, SubmarineState) {
        let cfg = SimConfig::default();
        let sub = SubmarineState::new(&cfg);
        (cfg, sub)
    }

    #[test]
    fn flat_battery_drops_lights_and_sonar() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 5.0; // at, not above, the floor
        sub.lights_active = true;
        sub.sonar_active = true;
        gate_subsystems(&cfg, &mut sub);
        assert!(!sub.lights_active);
        assert!(!sub.sonar_active);
    }

    #[test]
    fn backup_power_keeps_systems_up() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 0.0;
        sub.backup_power_active = true;
        sub.lights_active = true;
        sub.navigation_computer_active = true;
        gate_subsystems(&cfg, &mut sub);
        assert!(sub.lights_active);
        assert!(sub.navigation_computer_active);
    }

    #[test]
    fn navigation_floor_is_stricter_than_standard() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 8.0; // above 5, below 10
        sub.lights_active = true;
        sub.gyroscope_active = true;
        sub.depth_control_active = true;
        gate_subsystems(&cfg, &mut sub);
        assert!(sub.lights_active);
        assert!(!sub.gyroscope_active);
        assert!(!sub.depth_control_active);
    }

    #[test]
    fn coolant_loss_scrams_a_hot_reactor() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 80.0;
        sub.reactor_active = true;
        sub.coolant_pumps_active = false;
        sub.reactor_temp = 150.0;
        gate_subsystems(&cfg, &mut sub);
        assert!(!sub.reactor_active);
    }

    #[test]
    fn coolant_loss_is_tolerated_while_cold() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 80.0;
        sub.reactor_active = true;
        sub.containment_active = true;
        sub.reactor_temp = 60.0;
        gate_subsystems(&cfg, &mut sub);
        assert!(sub.reactor_active);
    }

    #[test]
    fn containment_loss_scrams_above_threshold() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 80.0;
        sub.reactor_active = true;
        sub.coolant_pumps_active = true;
        sub.containment_active = false;
        sub.reactor_temp = cfg.containment_scram_temp + 10.0;
        gate_subsystems(&cfg, &mut sub);
        assert!(!sub.reactor_active);
    }

    #[test]
    fn oxygen_main_drops_below_quorum() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 80.0;
        sub.oxygen_system_active = true;
        sub.oxygen_scrubbers_active = true; // only one of three
        gate_subsystems(&cfg, &mut sub);
        assert!(!sub.oxygen_system_active);
    }

    #[test]
    fn overheat_without_backup_blacks_out_the_bus() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 100.0;
        sub.reactor_temp = cfg.reactor_overheat_temp + 50.0;
        sub.reactor_active = true;
        sub.coolant_pumps_active = true;
        sub.lights_active = true;
        sub.oxygen_system_active = true;
        sub.emergency_air_supply_active = true;
        gate_subsystems(&cfg, &mut sub);
        assert!(!sub.reactor_active);
        assert!(!sub.coolant_pumps_active);
        assert!(!sub.lights_active);
        assert!(!sub.oxygen_system_active);
        // Manual equipment is not on the bus.
        assert!(sub.emergency_air_supply_active);
    }

    #[test]
    fn overheat_with_backup_spares_the_bus() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 100.0;
        sub.backup_power_active = true;
        sub.reactor_temp = cfg.reactor_overheat_temp + 50.0;
        sub.lights_active = true;
        sub.coolant_pumps_active = true;
        gate_subsystems(&cfg, &mut sub);
        assert!(sub.lights_active);
        assert!(sub.coolant_pumps_active);
    }
}
