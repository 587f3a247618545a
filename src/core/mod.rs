//! Geometry, viewport and tuning constants shared by the simulation and UI.

pub mod constants;
pub mod geometry;
pub mod viewport;

pub use constants::*;
pub use geometry::Rect;
pub use viewport::Viewport;
