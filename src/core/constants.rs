// Physics defaults (logical pixels, per frame)
pub const GRAVITY: f64 = 0.19;
pub const FLAP_VELOCITY: f64 = -5.5;
pub const OBSTACLE_SPEED: f64 = 1.0;
pub const SPAWN_INTERVAL_FRAMES: u32 = 120;

// Player sprite
pub const PLAYER_WIDTH: f64 = 24.0;
pub const PLAYER_HEIGHT: f64 = 16.0;
pub const PLAYER_MIN_X: f64 = 20.0;
pub const PLAYER_X_FRACTION: f64 = 0.25;
pub const PLAYER_START_Y_FRACTION: f64 = 0.45;

// Rotation is cosmetic: degrees per unit of velocity, clamped
pub const ROTATION_PER_VELOCITY: f64 = 3.0;
pub const ROTATION_MIN_DEG: f64 = -30.0;
pub const ROTATION_MAX_DEG: f64 = 60.0;

// Obstacle sizing as fractions of the viewport
pub const BARRIER_MIN_WIDTH: f64 = 60.0;
pub const BARRIER_WIDTH_FRACTION: f64 = 0.12;
pub const BARRIER_HEIGHT_FRACTION: f64 = 0.9;
pub const GAP_FRACTION: f64 = 0.35;
pub const GAP_TOP_MIN_FRACTION: f64 = 0.12;
pub const GAP_BAND_BOTTOM_FRACTION: f64 = 0.60;

// Frame clock
pub const FRAME_MS: u64 = 16; // ~60 FPS
pub const MAX_FRAME_DELTA_MS: u64 = 100;

// Terminal cell to logical pixel scale
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

// Messages
pub const START_MESSAGE: &str = "Press Space or Tap to Start";
pub const GAME_OVER_MESSAGE: &str = "Game Over! Press Space or Tap to try again";
pub const SCORE_TITLE: &str = "Score: ";
