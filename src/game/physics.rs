//! Gravity integration and flapping.

use super::types::Player;
use crate::core::constants::{ROTATION_MAX_DEG, ROTATION_MIN_DEG, ROTATION_PER_VELOCITY};
use crate::core::Viewport;

/// What the player ran into during a gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityOutcome {
    Airborne,
    /// Clamped at the top; velocity zeroed, run continues.
    Ceiling,
    /// Clamped at the bottom; the run is over.
    Floor,
}

/// One gravity step: accelerate, move, clamp to `[0, floor]`.
pub fn apply_gravity(player: &mut Player, gravity: f64, viewport: &Viewport) -> GravityOutcome {
    player.velocity += gravity;
    player.y += player.velocity;

    let mut outcome = GravityOutcome::Airborne;
    if player.y <= 0.0 {
        player.y = 0.0;
        player.velocity = 0.0;
        outcome = GravityOutcome::Ceiling;
    }

    let floor = viewport.floor();
    if player.y >= floor {
        player.y = floor;
        outcome = GravityOutcome::Floor;
    }

    outcome
}

/// Replace the player's velocity with the flap impulse.
pub fn flap(player: &mut Player, flap_velocity: f64) {
    player.velocity = flap_velocity;
}

/// Sprite tilt in degrees for a given velocity. Cosmetic only.
pub fn rotation_for(velocity: f64) -> f64 {
    (velocity * ROTATION_PER_VELOCITY).clamp(ROTATION_MIN_DEG, ROTATION_MAX_DEG)
}
