use super::types::StepDebug;
use crate::{SimConfig, SubmarineState};

/// Ballast, buoyancy, trim and thrust integrated into vertical motion,
/// plus the pressure and flooding feedback on the hull.
pub(crate) fn update_physics(cfg: &SimConfig, sub: &mut SubmarineState, dt: f32, dbg: &mut StepDebug) {
    // An emergency surface overrides whatever the operator was doing.
    if sub.emergency_surface {
        sub.ballast_tanks_filled = false;
        sub.manual_ballast_blow_active = true;
        sub.thrust = -100.0;
    }

    let ballast_has_power = sub.battery_level > 0.0 || sub.backup_power_active;

    // Powered ballast moves toward its commanded level; filling is slower
    // than venting.
    let target = sub.ballast_target();
    dbg.ballast_target = target;
    if sub.ballast_control_active && ballast_has_power {
        if sub.ballast_level < target {
            sub.ballast_level = (sub.ballast_level + cfg.ballast_fill_rate * dt).min(target);
        } else if sub.ballast_level > target {
            sub.ballast_level = (sub.ballast_level - cfg.ballast_empty_rate * dt).max(target);
        }
    }

    // The manual blow is pneumatic and works with the grid dead.
    if sub.manual_ballast_blow_active && sub.ballast_level > 0.0 {
        sub.ballast_level = (sub.ballast_level
            - cfg.ballast_empty_rate * cfg.emergency_blow_factor * dt)
            .max(0.0);
    }

    // Net weight: tank deviation from neutral, plus flood water once the
    // hull starts letting the ocean in.
    let ballast_factor = (sub.ballast_level - 50.0) / 50.0;
    let mut ballast_weight = ballast_factor * 50.0;
    if sub.hull_integrity < 50.0 {
        ballast_weight += (50.0 - sub.hull_integrity) / 50.0 * 12.0;
    }

    // Degraded navigation makes every control input sloppier.
    let mut nav_precision = 1.0;
    if !sub.gyroscope_active {
        nav_precision *= 0.85;
    }
    if !sub.depth_control_active {
        nav_precision *= 0.9;
    }
    if !sub.ballast_control_active || !ballast_has_power {
        nav_precision *= 0.5;
    }

    let trim_effect = sub.trim_angle.to_radians().sin() * 6.0 * nav_precision;
    let thrust_effect = sub.thrust * 0.12;
    let target_speed = (ballast_weight + trim_effect + thrust_effect) * nav_precision;

    dbg.ballast_weight = ballast_weight;
    dbg.trim_effect = trim_effect;
    dbg.thrust_effect = thrust_effect;
    dbg.nav_precision = nav_precision;
    dbg.target_vertical_speed = target_speed;

    // Responsive first-order chase with speed-dependent resistance.
    let resistance = 1.0 + sub.vertical_speed.abs() * 0.05;
    let acceleration_rate = 8.0 / resistance;
    sub.vertical_speed += (target_speed - sub.vertical_speed) * acceleration_rate * dt;
    sub.vertical_speed *= 0.92_f32.powf(dt * 60.0);

    if sub.emergency_surface && sub.vertical_speed > -12.0 {
        sub.vertical_speed = -12.0;
    }

    sub.depth = (sub.depth + sub.vertical_speed * dt).clamp(0.0, cfg.max_depth);
    if sub.depth <= 0.0 {
        sub.depth = 0.0;
        sub.vertical_speed = sub.vertical_speed.max(0.0);
        sub.emergency_surface = false;
    }

    // Pressure load and damage past 80% of rated depth.
    let pressure_ratio = sub.depth / cfg.max_depth;
    sub.pressure_hull_stress = (pressure_ratio * 100.0).clamp(0.0, 100.0);
    if pressure_ratio > 0.8 && sub.hull_integrity > 0.0 {
        let damage_rate = (pressure_ratio - 0.8) * 15.0;
        sub.hull_integrity = (sub.hull_integrity - damage_rate * dt).max(0.0);
    }

    // A serious breach floods the tanks and eventually shorts the battery.
    if sub.hull_integrity < 25.0 {
        let severity = (25.0 - sub.hull_integrity) / 25.0;
        let mut flood_rate = severity * 40.0;
        if sub.manual_bilge_pumps_active {
            flood_rate *= 0.6;
        }
        sub.ballast_level = (sub.ballast_level + flood_rate * dt).min(100.0);
        if sub.hull_integrity < 10.0 && sub.battery_level > 0.0 {
            sub.battery_level = (sub.battery_level - 5.0 * dt).max(0.0);
        }
    }

    // Display scalar, km/h.
    sub.speed = sub.vertical_speed.abs() * 3.6;
}
