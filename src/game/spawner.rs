//! Obstacle generation on a frame timer.

use super::types::Obstacle;
use crate::core::constants::{
    BARRIER_HEIGHT_FRACTION, BARRIER_MIN_WIDTH, BARRIER_WIDTH_FRACTION, GAP_BAND_BOTTOM_FRACTION,
    GAP_FRACTION, GAP_TOP_MIN_FRACTION,
};
use crate::core::Viewport;
use rand::Rng;

/// Counts spawn-pass frames and emits a new pair once the interval is exceeded.
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    interval_frames: u32,
    frames_since_spawn: u32,
}

impl ObstacleSpawner {
    pub fn new(interval_frames: u32) -> Self {
        Self {
            interval_frames: interval_frames.max(1),
            frames_since_spawn: 0,
        }
    }

    pub fn reset(&mut self) {
        self.frames_since_spawn = 0;
    }

    #[cfg(test)]
    fn frames_since_spawn(&self) -> u32 {
        self.frames_since_spawn
    }

    /// Advance one frame. Returns a freshly spawned pair when due.
    pub fn tick<R: Rng>(&mut self, viewport: &Viewport, rng: &mut R) -> Option<Obstacle> {
        self.frames_since_spawn += 1;
        if self.frames_since_spawn <= self.interval_frames {
            return None;
        }
        self.frames_since_spawn = 0;
        Some(spawn_obstacle(viewport, rng))
    }
}

/// Build one barrier pair at the right edge of the viewport with a random gap.
///
/// Sizes are proportional to the viewport. The gap's top edge is drawn
/// uniformly from a band starting at 12% of the height and ending where the
/// gap's bottom would reach 60%, and is pulled up if the gap would otherwise
/// run past the bottom of the viewport.
pub fn spawn_obstacle<R: Rng>(viewport: &Viewport, rng: &mut R) -> Obstacle {
    let vw = viewport.width;
    let vh = viewport.height;

    let width = BARRIER_MIN_WIDTH.max(vw * BARRIER_WIDTH_FRACTION).round();
    let barrier_height = (vh * BARRIER_HEIGHT_FRACTION).round();
    let gap_height = (vh * GAP_FRACTION).round();

    let gap_top_min = (vh * GAP_TOP_MIN_FRACTION).round();
    let gap_top_max = (vh * GAP_BAND_BOTTOM_FRACTION - gap_height).round();
    let span = (gap_top_max - gap_top_min).max(1.0) as u32;
    let offset = rng.gen_range(0..=span) as f64;

    let room = (vh - gap_height).max(0.0);
    let gap_top = (gap_top_min + offset).min(room);

    Obstacle {
        x: vw,
        width,
        barrier_height,
        gap_top,
        gap_height,
        scored: false,
    }
}
