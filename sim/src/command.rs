use crate::{SimConfig, SubmarineState, Subsystem};

/// Discrete operator actions. Activation only ever happens here; the step
/// function itself only shuts things down (power gating, cascades).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Flip a subsystem, subject to its power threshold.
    Toggle(Subsystem),
    /// Start/stop the reactor. Starting requires rods out plus coolant
    /// pumps, steam generator, turbine and containment all up; stopping is
    /// always allowed.
    ToggleReactor,
    /// Insert/withdraw the control rods. Purely mechanical.
    ToggleControlRods,
    /// Main O2 system. Starting requires a 2-of-3 sub-generator quorum.
    ToggleOxygenSystem,
    /// Depth-hold autopilot. Engaging requires nav computer, gyroscope,
    /// depth control and the reactor all up.
    ToggleAutopilot,
    SetTargetDepth(f32),
    /// Pneumatic blow: vents the tanks fast and commits to surfacing.
    EmergencyBlow,
    EmergencySurface,
}

pub fn apply_command(cfg: &SimConfig, sub: &mut SubmarineState, cmd: Command) {
    match cmd {
        Command::Toggle(sys) => {
            if let Some(threshold) = sys.power_threshold(cfg) {
                if !sub.powered(threshold) {
                    return;
                }
            }
            let now_on = sys.toggle(sub);
            if sys == Subsystem::ManualBallastBlow && now_on {
                sub.ballast_tanks_filled = false;
                sub.emergency_surface = true;
            }
        }
        Command::ToggleReactor => {
            let can_start = !sub.control_rods_inserted
                && sub.coolant_pumps_active
                && sub.steam_generator_active
                && sub.power_turbine_active
                && sub.containment_active;
            // Shutdown is always allowed, even with the interlock unmet.
            if sub.reactor_active || (can_start && !sub.reactor_destroyed) {
                sub.reactor_active = !sub.reactor_active;
            }
        }
        Command::ToggleControlRods => {
            sub.control_rods_inserted = !sub.control_rods_inserted;
        }
        Command::ToggleOxygenSystem => {
            if !sub.powered(cfg.standard_power_threshold) {
                return;
            }
            if sub.oxygen_system_active || sub.life_support_quorum() >= 2 {
                sub.oxygen_system_active = !sub.oxygen_system_active;
            }
        }
        Command::ToggleAutopilot => {
            if sub.autopilot_active {
                sub.autopilot_active = false;
            } else if sub.navigation_computer_active
                && sub.gyroscope_active
                && sub.depth_control_active
                && sub.reactor_active
            {
                sub.autopilot_active = true;
            }
        }
        Command::SetTargetDepth(d) => {
            sub.target_depth = d.clamp(0.0, cfg.max_depth);
        }
        Command::EmergencyBlow => {
            sub.manual_ballast_blow_active = true;
            sub.ballast_tanks_filled = false;
            sub.emergency_surface = true;
        }
        Command::EmergencySurface => {
            sub.emergency_surface = true;
        }
    }
}

pub fn apply_commands(cfg: &SimConfig, sub: &mut SubmarineState, cmds: &[Command]) {
    for cmd in cmds {
        apply_command(cfg, sub, *cmd);
    }
}
