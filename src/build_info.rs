//! Compile-time build information.

pub const BUILD_COMMIT: &str = env!("FLAPPY_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("FLAPPY_BUILD_DATE");

/// Version string shown by `--version`.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FLAPPY_BUILD_DATE"),
    " ",
    env!("FLAPPY_BUILD_COMMIT"),
    ")"
);
