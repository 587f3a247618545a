//! Terminal rendering.

pub mod game_common;
pub mod game_scene;
pub mod responsive;

pub use game_scene::{play_area, render_game};
