use crate::SubInputs;

/// A sonar return the frontend may want to voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SonarPing {
    /// Playback volume in [0, 1], attenuated with depth.
    pub volume: f32,
}

/// State transitions that happened during one step. The core never calls
/// into audio or rendering; frontends poll these instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepEvents {
    pub sonar_ping: Option<SonarPing>,
    /// Automatic emergency shutdown fired this tick (non-terminal).
    pub reactor_scram: bool,
    /// The core melted down this tick (terminal).
    pub reactor_meltdown: bool,
}

/// Per-tick telemetry for logging and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepDebug {
    pub dt: f32,
    pub inputs: SubInputs,
    // Reactor
    pub reactor_heating: f32,
    pub reactor_cooling: f32,
    // Power & environment
    pub power_consumption: f32,
    pub hull_temp_target: f32,
    // Physics
    pub ballast_target: f32,
    pub ballast_weight: f32,
    pub trim_effect: f32,
    pub thrust_effect: f32,
    pub nav_precision: f32,
    pub target_vertical_speed: f32,
    // Life support
    pub oxygen_rate: f32,
    // Autopilot
    pub pid_error: f32,
    pub pid_integral: f32,
    pub pid_derivative: f32,
    pub pid_output: f32,
}
