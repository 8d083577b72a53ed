use super::types::StepDebug;
use crate::{SimConfig, SubmarineState, Subsystem};

/// Aggregate electrical consumption, drain or charge the battery, and
/// derive the water and internal hull temperatures.
pub(crate) fn update_power_and_environment(
    cfg: &SimConfig,
    sub: &mut SubmarineState,
    dt: f32,
    dbg: &mut StepDebug,
) {
    let has_power = sub.battery_level > 0.0 || sub.backup_power_active;

    // Base hotel load, then one pass over the subsystem table.
    let mut consumption = 0.1;
    if has_power {
        for sys in Subsystem::ALL {
            if sys.power_threshold(cfg).is_some() && sys.is_active(sub) {
                consumption += sys.draw_kw(cfg);
            }
        }
        if sub.thrust.abs() > 0.0 {
            consumption += cfg.propulsion_power_drain * (sub.thrust.abs() / 100.0);
        }
    }
    if sub.backup_power_active {
        // The generator carries the bus but costs something to run.
        consumption += 0.5;
    }
    sub.power_consumption = consumption;
    dbg.power_consumption = consumption;

    // Water temperature: quick linear drop to the thermocline, slow decline
    // past it, never below 2 °C.
    sub.water_temperature = if sub.depth < cfg.thermal_layer_depth {
        cfg.surface_water_temp - (sub.depth / cfg.thermal_layer_depth) * 15.0
    } else {
        5.0 - (sub.depth - cfg.thermal_layer_depth) / 1000.0
    }
    .max(2.0);

    // Battery: drains with consumption unless the reactor is carrying the
    // load, and cooks off when the core is in runaway territory.
    let overheated = sub.reactor_temp > cfg.reactor_overheat_temp;
    let reactor_carrying = sub.reactor_active && sub.reactor_power > 30.0 && !overheated;
    if !reactor_carrying && sub.battery_level > 0.0 {
        let drain_multiplier = if overheated { 2.0 } else { 1.0 };
        if has_power && consumption > 0.1 {
            sub.battery_level = (sub.battery_level
                - consumption * cfg.battery_drain_rate * drain_multiplier * dt)
                .max(0.0);
        }
    }
    if overheated && sub.battery_level > 0.0 {
        sub.battery_level = (sub.battery_level - 3.0 * dt).max(0.0);
    }

    // Internal hull temperature approaches a target assembled from ambient
    // water, reactor heat, cooling equipment and flooding.
    let mut target = sub.water_temperature + 10.0;
    if sub.reactor_active {
        let reactor_heat = ((sub.reactor_temp - 50.0) / 100.0).clamp(0.0, 3.0);
        target += reactor_heat * 15.0;
    }
    if sub.air_circulation_active {
        target -= 5.0;
    }
    if sub.emergency_cooling_active {
        target -= 8.0;
    }
    target -= (sub.depth / 1000.0) * 2.0;
    if sub.hull_integrity < 50.0 {
        // Flooding blends the interior toward ambient water.
        let breach = (50.0 - sub.hull_integrity) / 50.0;
        target = sub.water_temperature + (target - sub.water_temperature) * (1.0 - breach);
    }
    if sub.emergency_lighting_active {
        target += 2.0;
    }
    dbg.hull_temp_target = target;

    sub.hull_temperature += (target - sub.hull_temperature) * 0.5 * dt;
    sub.hull_temperature = sub.hull_temperature.clamp(-10.0, 80.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boat() -> (SimConfig, SubmarineState) {
        let cfg = SimConfig::default();
        let sub = SubmarineState::new(&cfg);
        (cfg, sub)
    }

    fn step(cfg: &SimConfig, sub: &mut SubmarineState, dt: f32) {
        let mut dbg = StepDebug::default();
        update_power_and_environment(cfg, sub, dt, &mut dbg);
    }

    #[test]
    fn water_cools_with_depth_and_floors_at_two_degrees() {
        let (cfg, mut sub) = boat();
        step(&cfg, &mut sub, 0.1);
        assert!((sub.water_temperature - cfg.surface_water_temp).abs() < 1e-3);

        sub.depth = cfg.thermal_layer_depth;
        step(&cfg, &mut sub, 0.1);
        assert!((sub.water_temperature - 5.0).abs() < 1e-3);

        sub.depth = 10_000.0;
        step(&cfg, &mut sub, 0.1);
        assert_eq!(sub.water_temperature, 2.0);
    }

    #[test]
    fn idle_boat_consumes_nothing_and_keeps_its_battery() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 40.0;
        for _ in 0..1000 {
            step(&cfg, &mut sub, 0.1);
        }
        assert_eq!(sub.battery_level, 40.0);
        assert!((sub.power_consumption - 0.1).abs() < 1e-6);
    }

    #[test]
    fn active_loads_drain_the_battery() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 40.0;
        sub.lights_active = true;
        sub.sonar_active = true;
        step(&cfg, &mut sub, 1.0);
        assert!(sub.battery_level < 40.0);
        assert!(sub.power_consumption > 2.0);
    }

    #[test]
    fn reactor_at_load_stops_the_drain() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 40.0;
        sub.lights_active = true;
        sub.reactor_active = true;
        sub.reactor_power = 60.0;
        step(&cfg, &mut sub, 1.0);
        assert_eq!(sub.battery_level, 40.0);
    }

    #[test]
    fn overheat_cooks_the_battery() {
        let (cfg, mut sub) = boat();
        sub.battery_level = 40.0;
        sub.reactor_temp = cfg.reactor_overheat_temp + 100.0;
        step(&cfg, &mut sub, 1.0);
        assert!(sub.battery_level <= 37.0);
    }

    #[test]
    fn flooded_hull_tracks_water_temperature() {
        let (cfg, mut sub) = boat();
        sub.hull_integrity = 0.0;
        sub.hull_temperature = 30.0;
        for _ in 0..600 {
            step(&cfg, &mut sub, 0.1);
        }
        assert!((sub.hull_temperature - sub.water_temperature).abs() < 1.0);
    }
}
