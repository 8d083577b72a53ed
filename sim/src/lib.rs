//! Submarine systems simulation shared by headless tools and tests.
//!
//! This crate intentionally avoids any engine types. It exposes a simple,
//! serializable tuning schema (`SimConfig`) and a fixed-timestep state
//! update (`step_submarine`) a frontend can drive at frame rate. Rendering,
//! audio and input stay outside; state transitions that a frontend may want
//! to react to (sonar pings, reactor scram) come back as `StepEvents`.

mod config;
pub use config::SimConfig;
mod state;
pub use state::{AutopilotState, Failure, SubInputs, SubmarineState};
mod subsystem;
pub use subsystem::Subsystem;
mod command;
pub use command::{apply_command, apply_commands, Command};

pub mod systems;
pub use systems::{step_submarine, step_submarine_dbg, SonarPing, StepDebug, StepEvents};
