//! Frame scheduling for the three per-frame update passes.
//!
//! Each pass is scheduled one frame at a time and must re-schedule itself to
//! keep running. Handles carry the generation they were issued under;
//! `cancel_all` bumps the generation, so a handle drained earlier in the same
//! frame is refused both when it is about to run and when it tries to
//! re-schedule.

use crate::core::constants::{FRAME_MS, MAX_FRAME_DELTA_MS};

/// The update passes run every frame while a run is live, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramePass {
    MoveObstacles,
    ApplyGravity,
    SpawnObstacles,
}

impl FramePass {
    pub const ALL: [FramePass; 3] = [
        FramePass::MoveObstacles,
        FramePass::ApplyGravity,
        FramePass::SpawnObstacles,
    ];
}

/// A pending request to run one pass on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassHandle {
    pub pass: FramePass,
    generation: u64,
}

/// Owns the scheduled pass handles for the current run.
#[derive(Debug, Default)]
pub struct FrameLoop {
    generation: u64,
    scheduled: Vec<PassHandle>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel anything pending and schedule every pass for the next frame.
    pub fn schedule_all(&mut self) {
        self.cancel_all();
        let generation = self.generation;
        self.scheduled = FramePass::ALL
            .iter()
            .map(|&pass| PassHandle { pass, generation })
            .collect();
    }

    /// Invalidate every outstanding handle, including ones already drained
    /// for the frame in progress.
    pub fn cancel_all(&mut self) {
        self.generation += 1;
        self.scheduled.clear();
    }

    /// Take the handles due this frame. Each must be re-scheduled to run again.
    pub fn take_due(&mut self) -> Vec<PassHandle> {
        std::mem::take(&mut self.scheduled)
    }

    pub fn is_live(&self, handle: PassHandle) -> bool {
        handle.generation == self.generation
    }

    /// Queue a drained handle for the next frame. Stale handles are dropped.
    pub fn reschedule(&mut self, handle: PassHandle) -> bool {
        if !self.is_live(handle) {
            return false;
        }
        self.scheduled.push(handle);
        true
    }

    pub fn is_scheduled(&self, pass: FramePass) -> bool {
        self.scheduled.iter().any(|h| h.pass == pass)
    }

    pub fn is_idle(&self) -> bool {
        self.scheduled.is_empty()
    }
}

/// Converts wall-clock time into whole frames of fixed length.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_ms: u64,
    accumulated_ms: u64,
}

impl FrameClock {
    pub fn new(frame_ms: u64) -> Self {
        Self {
            frame_ms: frame_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn frame_ms(&self) -> u64 {
        self.frame_ms
    }

    /// Feed elapsed milliseconds and get back how many frames are due.
    ///
    /// Elapsed time is capped so a stall (suspended terminal, debugger)
    /// doesn't release a burst of frames.
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        self.accumulated_ms += elapsed_ms.min(MAX_FRAME_DELTA_MS);
        let frames = self.accumulated_ms / self.frame_ms;
        self.accumulated_ms %= self.frame_ms;
        frames as u32
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FRAME_MS)
    }
}
