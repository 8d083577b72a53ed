mod types;
mod gating;
mod reactor;
mod cooling;
mod power;
mod physics;
mod life_support;
mod navigation;
mod timers;
mod step;

pub use step::{step_submarine, step_submarine_dbg};
pub use types::{SonarPing, StepDebug, StepEvents};
