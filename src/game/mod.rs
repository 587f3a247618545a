//! The side-scrolling simulation.
//!
//! A player sprite falls under gravity and flaps upward on input while pairs
//! of barriers scroll in from the right. Passing a pair scores a point;
//! touching a barrier or the floor ends the run.

pub mod motion;
pub mod physics;
pub mod scheduler;
pub mod session;
pub mod spawner;
pub mod types;

pub use scheduler::{FrameClock, FrameLoop, FramePass};
pub use session::{FrameEvents, FrameSnapshot, Session};
pub use types::*;
