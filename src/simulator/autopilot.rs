//! A simple bot that plays through the public `Session` API.

use crate::game::Session;

/// Flaps whenever the player is falling and its bottom edge has dropped
/// below the aim line inside the next gap.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Aim line as a fraction of the gap height, measured from the gap top.
    pub aim_fraction: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { aim_fraction: 0.75 }
    }
}

impl Autopilot {
    /// `y` the player's bottom edge should stay above.
    pub fn aim_line(&self, session: &Session) -> f64 {
        let player = session.player().rect();
        session
            .obstacles()
            .iter()
            .filter(|o| o.right() >= player.x)
            .min_by(|a, b| a.x.total_cmp(&b.x))
            .map(|o| o.gap_top + o.gap_height * self.aim_fraction)
            .unwrap_or(session.viewport().height * 0.6)
    }

    pub fn should_flap(&self, session: &Session) -> bool {
        let player = session.player();
        player.velocity >= 0.0 && player.rect().bottom() > self.aim_line(session)
    }
}
