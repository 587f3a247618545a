//! Game state data structures.

use crate::core::constants::{
    FLAP_VELOCITY, GRAVITY, OBSTACLE_SPEED, PLAYER_HEIGHT, PLAYER_START_Y_FRACTION, PLAYER_WIDTH,
    SPAWN_INTERVAL_FRAMES,
};
use crate::core::{Rect, Viewport};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first input.
    Start,
    Play,
    /// Run is over; input restarts.
    End,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndCause {
    /// Player overlapped a barrier.
    Collision,
    /// Player dropped to the bottom of the viewport.
    Floor,
}

/// Per-frame physics parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to the player's velocity every frame (positive = downward).
    pub gravity: f64,
    /// Velocity a flap sets, replacing whatever the player had.
    pub flap_velocity: f64,
    /// Leftward obstacle movement per frame.
    pub obstacle_speed: f64,
    /// Frames between obstacle spawns.
    pub spawn_interval_frames: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval_frames: SPAWN_INTERVAL_FRAMES,
        }
    }
}

/// The controllable sprite. Only its vertical axis moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f64,
    /// Top edge in logical pixels. 0 = ceiling.
    pub y: f64,
    /// Positive = falling.
    pub velocity: f64,
}

impl Player {
    /// Player placed at its starting spot for the given viewport.
    pub fn spawn(viewport: &Viewport) -> Self {
        Self {
            x: viewport.player_x(),
            y: (viewport.height * PLAYER_START_Y_FRACTION).round(),
            velocity: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// A top/bottom barrier pair sharing one column and framing one gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge shared by both barriers.
    pub x: f64,
    pub width: f64,
    /// Height of each barrier.
    pub barrier_height: f64,
    /// Top of the gap (bottom edge of the top barrier).
    pub gap_top: f64,
    pub gap_height: f64,
    /// Set once the player has passed this pair.
    pub scored: bool,
}

impl Obstacle {
    pub fn top_rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.gap_top - self.barrier_height,
            self.width,
            self.barrier_height,
        )
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.gap_top + self.gap_height,
            self.width,
            self.barrier_height,
        )
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Fully scrolled past the left edge of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.right() <= 0.0
    }

    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.top_rect().overlaps(rect) || self.bottom_rect().overlaps(rect)
    }
}

/// Everything a run mutates.
#[derive(Debug, Clone)]
pub struct SimState {
    pub phase: Phase,
    pub player: Player,
    pub score: u32,
    pub obstacles: Vec<Obstacle>,
    pub end_cause: Option<EndCause>,
}

impl SimState {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            phase: Phase::Start,
            player: Player::spawn(viewport),
            score: 0,
            obstacles: Vec::new(),
            end_cause: None,
        }
    }
}
