use rand::Rng;

use super::types::StepDebug;
use crate::SubmarineState;

// PID gains, tuned against the default physics to avoid overshoot. Depth
// already integrates the ballast offset, so the derivative term carries
// most of the damping and the integral stays small.
const KP: f32 = 0.05;
const KI: f32 = 0.01;
const KD: f32 = 0.15;
const INTEGRAL_LIMIT: f32 = 10.0;
const DEADBAND_M: f32 = 2.0;
// Ballast percent commanded per unit of control output.
const BALLAST_GAIN: f32 = 2.0;

/// Depth-hold autopilot and gyroscope stability effects.
///
/// The autopilot needs the nav computer, gyroscope, depth control and the
/// reactor all up; it translates a PID output on depth error into a
/// continuous ballast command and a trim angle. Without the gyroscope the
/// planes pick up a periodic random drift, autopilot or not.
pub(crate) fn update_navigation<R: Rng + ?Sized>(
    sub: &mut SubmarineState,
    dt: f32,
    rng: &mut R,
    dbg: &mut StepDebug,
) {
    if sub.gyroscope_active {
        sub.gyro_drift_timer = 0.0;
    } else {
        sub.gyro_drift_timer += dt;
        if sub.gyro_drift_timer > 2.0 {
            sub.gyro_drift_timer = 0.0;
            let drift = rng.gen_range(-1i32..=1) as f32 * 0.5;
            sub.trim_angle = (sub.trim_angle + drift).clamp(-20.0, 20.0);
        }
    }

    let operational = sub.navigation_computer_active
        && sub.gyroscope_active
        && sub.depth_control_active
        && sub.reactor_active;
    if sub.autopilot_active && !operational {
        sub.autopilot_active = false;
    }

    if !sub.autopilot_active {
        sub.autopilot.integral_error = 0.0;
        sub.autopilot.previous_error = 0.0;
        sub.autopilot_ballast_target = None;
        return;
    }

    let error = sub.target_depth - sub.depth;
    sub.autopilot.integral_error =
        (sub.autopilot.integral_error + error * dt).clamp(-INTEGRAL_LIMIT, INTEGRAL_LIMIT);
    let derivative = if dt > 0.0 {
        (error - sub.autopilot.previous_error) / dt
    } else {
        0.0
    };
    sub.autopilot.previous_error = error;

    let output = KP * error + KI * sub.autopilot.integral_error + KD * derivative;

    dbg.pid_error = error;
    dbg.pid_integral = sub.autopilot.integral_error;
    dbg.pid_derivative = derivative;
    dbg.pid_output = output;

    if error.abs() > DEADBAND_M {
        // Positive output means "go deeper": take on ballast, pitch down.
        sub.autopilot_ballast_target = Some((50.0 + output * BALLAST_GAIN).clamp(0.0, 100.0));
        sub.trim_angle = (output * 2.0).clamp(-10.0, 10.0);
    } else {
        // On target: neutral tanks, unwind the accumulator, bleed the
        // trim off.
        sub.autopilot.integral_error = 0.0;
        sub.autopilot_ballast_target = Some(50.0);
        sub.trim_angle *= 0.9_f32.powf(dt * 60.0);
        if sub.trim_angle.abs() < 0.5 {
            sub.trim_angle = 0.0;
        }
    }
}
