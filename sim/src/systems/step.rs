use rand::Rng;

use super::types::{StepDebug, StepEvents};
use super::{cooling, gating, life_support, navigation, physics, power, reactor, timers};
use crate::{SimConfig, SubInputs, SubmarineState};

/// Advance the boat by `dt` seconds of simulated time.
///
/// Sub-models run leaves-first: gating decides what may stay up, then the
/// reactor, cooling, power/environment, physics, life support, navigation
/// and the auxiliary timers each read and write the shared state. The call
/// is synchronous and total: it always returns, leaving every field inside
/// its documented range. See `step_submarine_dbg` for telemetry.
pub fn step_submarine<R: Rng + ?Sized>(
    cfg: &SimConfig,
    inputs: SubInputs,
    sub: &mut SubmarineState,
    dt: f32,
    rng: &mut R,
) -> StepEvents {
    step_submarine_dbg(cfg, inputs, sub, dt, rng, None)
}

/// Variant of `step_submarine` that fills out an optional telemetry struct.
pub fn step_submarine_dbg<R: Rng + ?Sized>(
    cfg: &SimConfig,
    inputs: SubInputs,
    sub: &mut SubmarineState,
    dt: f32,
    rng: &mut R,
    mut dbg_out: Option<&mut StepDebug>,
) -> StepEvents {
    let mut events = StepEvents::default();
    if dt <= 0.0 {
        return events;
    }
    let mut dbg = StepDebug {
        dt,
        inputs,
        ..StepDebug::default()
    };

    // Operator axes. The autopilot owns the planes while engaged.
    sub.thrust = inputs.thrust.clamp(-100.0, 100.0);
    if !sub.autopilot_active {
        sub.trim_angle = (sub.trim_angle + inputs.trim_rate * dt).clamp(-30.0, 30.0);
    }

    gating::gate_subsystems(cfg, sub);
    reactor::update_reactor(cfg, sub, dt, &mut events, &mut dbg);
    cooling::update_manual_cooling(cfg, sub, dt);
    power::update_power_and_environment(cfg, sub, dt, &mut dbg);
    physics::update_physics(cfg, sub, dt, &mut dbg);
    life_support::update_life_support(sub, dt, &mut dbg);
    navigation::update_navigation(sub, dt, rng, &mut dbg);
    timers::update_timers(cfg, sub, dt, &mut events);

    sub.clamp_ranges(cfg);

    if let Some(out) = dbg_out.as_deref_mut() {
        *out = dbg;
    }
    events
}
