//! Flappy - terminal side-scrolling reflex game.
//!
//! The simulation (`game`) is independent of the terminal: the binary feeds
//! it input and frame ticks and draws the snapshots it produces with `ui`.

pub mod audio;
pub mod build_info;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod simulator;
pub mod ui;

pub use crate::core::{Rect, Viewport};
pub use config::GameConfig;
pub use error::{AppError, AppResult};
pub use game::{EndCause, FrameEvents, FrameSnapshot, Phase, Session, Tuning};
