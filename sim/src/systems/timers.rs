use super::types::{SonarPing, StepEvents};
use crate::{SimConfig, SubmarineState};

/// Sonar ping cadence and the nitrogen narcosis gauge.
pub(crate) fn update_timers(
    cfg: &SimConfig,
    sub: &mut SubmarineState,
    dt: f32,
    events: &mut StepEvents,
) {
    // Sonar needs real battery margin and a quiet plant; a hot core drowns
    // the receivers in noise.
    let sonar_usable = sub.battery_level > cfg.nav_power_threshold && sub.reactor_temp < 150.0;
    if sub.sonar_active && sonar_usable {
        sub.sonar_ping_timer += dt;
        if sub.sonar_ping_timer >= cfg.sonar_ping_interval {
            sub.sonar_ping_timer = 0.0;
            let depth_factor = (1.0 - (sub.depth / cfg.sonar_range) * 0.3).max(0.3);
            events.sonar_ping = Some(SonarPing {
                volume: 0.6 * depth_factor,
            });
        }
    } else {
        sub.sonar_ping_timer = 0.0;
        if sub.sonar_active && !sonar_usable {
            sub.sonar_active = false;
        }
    }

    // Narcosis builds with excess depth and clears on the way up.
    if sub.depth > cfg.nitrogen_narcosis_depth {
        let depth_factor = (sub.depth - cfg.nitrogen_narcosis_depth) / 1000.0;
        sub.nitrogen_level = (sub.nitrogen_level + depth_factor * 0.5 * dt).min(100.0);
    } else if sub.nitrogen_level > 0.0 {
        sub.nitrogen_level = (sub.nitrogen_level - 2.0 * dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sonar_boat() -> (SimConfig, SubmarineState) {
        let cfg = SimConfig::default();
        let mut sub = SubmarineState::new(&cfg);
        sub.battery_level = 50.0;
        sub.sonar_active = true;
        (cfg, sub)
    }

    fn pings_over(cfg: &SimConfig, sub: &mut SubmarineState, seconds: f32, dt: f32) -> u32 {
        let steps = (seconds / dt).round() as u32;
        let mut pings = 0;
        for _ in 0..steps {
            let mut events = StepEvents::default();
            update_timers(cfg, sub, dt, &mut events);
            if events.sonar_ping.is_some() {
                pings += 1;
            }
        }
        pings
    }

    #[test]
    fn pings_follow_the_configured_cadence() {
        let (cfg, mut sub) = sonar_boat();
        let pings = pings_over(&cfg, &mut sub, 10.0, 0.1);
        // 10 s at a 2 s interval, allowing for accumulation rounding.
        assert!((4..=5).contains(&pings), "got {pings} pings");
    }

    #[test]
    fn deep_pings_are_quieter_but_never_silent() {
        let (cfg, mut sub) = sonar_boat();
        sub.depth = cfg.sonar_range * 4.0;
        sub.sonar_ping_timer = cfg.sonar_ping_interval;
        let mut events = StepEvents::default();
        update_timers(&cfg, &mut sub, 0.1, &mut events);
        let ping = events.sonar_ping.expect("due a ping");
        assert!((ping.volume - 0.6 * 0.3).abs() < 1e-3);
    }

    #[test]
    fn hot_reactor_silences_and_disables_sonar() {
        let (cfg, mut sub) = sonar_boat();
        sub.reactor_temp = 200.0;
        sub.sonar_ping_timer = 1.5;
        let mut events = StepEvents::default();
        update_timers(&cfg, &mut sub, 0.1, &mut events);
        assert!(events.sonar_ping.is_none());
        assert!(!sub.sonar_active);
        assert_eq!(sub.sonar_ping_timer, 0.0);
    }

    #[test]
    fn narcosis_builds_deep_and_clears_shallow() {
        let (cfg, mut sub) = sonar_boat();
        sub.depth = cfg.nitrogen_narcosis_depth + 2000.0;
        let mut events = StepEvents::default();
        for _ in 0..600 {
            update_timers(&cfg, &mut sub, 0.1, &mut events);
        }
        assert!(sub.nitrogen_level > 50.0);

        sub.depth = 0.0;
        for _ in 0..600 {
            update_timers(&cfg, &mut sub, 0.1, &mut events);
        }
        assert_eq!(sub.nitrogen_level, 0.0);
    }
}
