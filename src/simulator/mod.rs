//! Headless simulator for tuning and regression checks.
//!
//! Plays many runs of the real `Session` under a simple autopilot and
//! reports how long they last and how they end.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
