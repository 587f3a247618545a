//! Obstacle movement, collision detection and scoring.

use super::types::SimState;

/// Result of one obstacle pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    /// No collision. Carries how many pairs were scored this frame.
    Clear { scored: u32 },
    Collision,
}

/// Advance every obstacle, drop the off-screen ones, then test the player
/// against what is left.
///
/// The obstacle list is never mutated while it is being walked: movement and
/// removal happen first as whole-list operations, collision and scoring run
/// over the surviving set afterwards.
pub fn advance_obstacles(state: &mut SimState, speed: f64) -> MotionOutcome {
    for obstacle in &mut state.obstacles {
        obstacle.x -= speed;
    }
    state.obstacles.retain(|o| !o.is_off_screen());

    let player = state.player.rect();
    if state.obstacles.iter().any(|o| o.collides_with(&player)) {
        return MotionOutcome::Collision;
    }

    let mut scored = 0;
    for obstacle in &mut state.obstacles {
        if !obstacle.scored && obstacle.right() < player.x {
            obstacle.scored = true;
            scored += 1;
        }
    }
    state.score += scored;

    MotionOutcome::Clear { scored }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;
    use crate::game::types::Obstacle;

    fn state() -> SimState {
        let mut s = SimState::new(&Viewport::new(800.0, 480.0));
        // Player at x=200, y=216, 24x16
        s.player.y = 216.0;
        s
    }

    fn pair(x: f64, gap_top: f64) -> Obstacle {
        Obstacle {
            x,
            width: 60.0,
            barrier_height: 432.0,
            gap_top,
            gap_height: 168.0,
            scored: false,
        }
    }

    #[test]
    fn test_obstacles_move_left_by_speed() {
        let mut s = state();
        s.obstacles.push(pair(700.0, 150.0));
        advance_obstacles(&mut s, 1.0);
        assert_eq!(s.obstacles[0].x, 699.0);
        advance_obstacles(&mut s, 2.5);
        assert_eq!(s.obstacles[0].x, 696.5);
    }

    #[test]
    fn test_off_screen_obstacles_removed_without_skipping_neighbours() {
        let mut s = state();
        s.obstacles.push(pair(-59.5, 150.0));
        s.obstacles.push(pair(-59.0, 150.0));
        s.obstacles.push(pair(600.0, 150.0));
        advance_obstacles(&mut s, 1.0);
        // First two reach right edge <= 0 in the same frame
        assert_eq!(s.obstacles.len(), 1);
        assert_eq!(s.obstacles[0].x, 599.0);
    }

    #[test]
    fn test_collision_with_top_barrier() {
        let mut s = state();
        // Gap starts below the player
        s.obstacles.push(pair(201.0, 300.0));
        assert_eq!(advance_obstacles(&mut s, 1.0), MotionOutcome::Collision);
    }

    #[test]
    fn test_collision_with_bottom_barrier() {
        let mut s = state();
        // Gap is 0..168 so the bottom barrier covers the player
        s.obstacles.push(pair(201.0, 0.0));
        assert_eq!(advance_obstacles(&mut s, 1.0), MotionOutcome::Collision);
    }

    #[test]
    fn test_flying_through_gap_is_clear() {
        let mut s = state();
        s.obstacles.push(pair(201.0, 150.0));
        assert_eq!(
            advance_obstacles(&mut s, 1.0),
            MotionOutcome::Clear { scored: 0 }
        );
    }

    #[test]
    fn test_adjacent_barrier_is_not_a_collision() {
        let mut s = state();
        // After moving, the barrier's right edge sits exactly on the player's left edge
        s.obstacles.push(pair(141.0, 300.0));
        assert_eq!(
            advance_obstacles(&mut s, 1.0),
            MotionOutcome::Clear { scored: 0 }
        );
    }

    #[test]
    fn test_score_once_when_trailing_edge_passes_player() {
        let mut s = state();
        // Right edge at 201 -> 200 -> 199
        s.obstacles.push(pair(141.0, 150.0));
        assert_eq!(
            advance_obstacles(&mut s, 1.0),
            MotionOutcome::Clear { scored: 0 }
        );
        assert!(!s.obstacles[0].scored);
        assert_eq!(
            advance_obstacles(&mut s, 1.0),
            MotionOutcome::Clear { scored: 1 }
        );
        assert!(s.obstacles[0].scored);
        assert_eq!(s.score, 1);

        for _ in 0..10 {
            advance_obstacles(&mut s, 1.0);
        }
        assert_eq!(s.score, 1);
    }

    #[test]
    fn test_collision_frame_does_not_score() {
        let mut s = state();
        s.obstacles.push(pair(100.0, 150.0)); // already behind the player
        s.obstacles.push(pair(201.0, 300.0)); // hits the player
        assert_eq!(advance_obstacles(&mut s, 1.0), MotionOutcome::Collision);
        assert_eq!(s.score, 0);
        assert!(!s.obstacles[0].scored);
    }
}
