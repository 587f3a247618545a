//! Simulation report generation.

use crate::game::EndCause;
use serde::Serialize;

/// Outcome of one simulated run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub frames: u64,
    /// `None` when the run was cut off by the frame cap.
    pub end_cause: Option<EndCause>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub avg_score: f64,
    pub best_score: u32,
    pub avg_frames: f64,
    pub collisions: u32,
    pub floor_hits: u32,
    pub timeouts: u32,
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let count = |cause: Option<EndCause>| {
            runs.iter().filter(|r| r.end_cause == cause).count() as u32
        };

        Self {
            num_runs,
            avg_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor,
            best_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_frames: runs.iter().map(|r| r.frames as f64).sum::<f64>() / divisor,
            collisions: count(Some(EndCause::Collision)),
            floor_hits: count(Some(EndCause::Floor)),
            timeouts: count(None),
            runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Results:\n");
        out.push_str(&format!("  Runs:            {}\n", self.num_runs));
        out.push_str(&format!("  Average score:   {:.2}\n", self.avg_score));
        out.push_str(&format!("  Best score:      {}\n", self.best_score));
        out.push_str(&format!("  Average frames:  {:.0}\n", self.avg_frames));
        out.push_str("  Ended by:\n");
        out.push_str(&format!("    Collision:     {}\n", self.collisions));
        out.push_str(&format!("    Floor:         {}\n", self.floor_hits));
        out.push_str(&format!("    Frame cap:     {}\n", self.timeouts));
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
