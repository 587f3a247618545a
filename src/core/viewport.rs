//! The visible play field, measured in logical pixels.

use super::constants::{PLAYER_HEIGHT, PLAYER_MIN_X, PLAYER_X_FRACTION};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Viewport covering a grid of terminal cells.
    pub fn from_cells(cols: u16, rows: u16, cell_width_px: f64, cell_height_px: f64) -> Self {
        Self::new(cols as f64 * cell_width_px, rows as f64 * cell_height_px)
    }

    /// Lowest `y` the player's top edge may reach.
    pub fn floor(&self) -> f64 {
        (self.height - PLAYER_HEIGHT).max(0.0)
    }

    /// Fixed horizontal position of the player.
    pub fn player_x(&self) -> f64 {
        PLAYER_MIN_X.max((self.width * PLAYER_X_FRACTION).round())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 480.0)
    }
}
