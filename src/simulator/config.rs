//! Simulation configuration.

use crate::core::Viewport;
use crate::game::Tuning;

/// Configuration for a batch of headless runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frames after which a still-live run is cut off
    pub max_frames_per_run: u64,

    pub viewport: Viewport,

    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_frames_per_run: 20_000,
            viewport: Viewport::default(),
            tuning: Tuning::default(),
        }
    }
}

impl SimConfig {
    /// Small reproducible batch for tests.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            max_frames_per_run: 3_000,
            ..Default::default()
        }
    }
}
