//! Player-tunable settings, read from a JSON file.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "physics": { "gravity": 0.25 }, "sound": "silent" }
//! ```

use crate::audio::SoundMode;
use crate::core::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX, FRAME_MS, MAX_FRAME_DELTA_MS};
use crate::game::Tuning;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where a loaded `GameConfig` came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file was found. `missing` is the default location that was checked,
    /// if the platform has one.
    Defaults { missing: Option<PathBuf> },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: Tuning,
    /// Length of one simulation frame.
    pub frame_ms: u64,
    /// Logical pixels per terminal column.
    pub cell_width_px: f64,
    /// Logical pixels per terminal row.
    pub cell_height_px: f64,
    pub sound: SoundMode,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: Tuning::default(),
            frame_ms: FRAME_MS,
            cell_width_px: CELL_WIDTH_PX,
            cell_height_px: CELL_HEIGHT_PX,
            sound: SoundMode::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Platform directories for config and logs.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "flappy")
}

impl GameConfig {
    /// `config.json` in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit path, or from the default location if one exists.
    ///
    /// An explicit path must exist. A missing default file just yields the
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_source(explicit).map(|(config, _)| config)
    }

    /// Like `load`, but also reports where the settings came from so the
    /// caller can log it once logging is up.
    pub fn load_with_source(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_from(explicit, Self::default_path().as_deref())
    }

    fn load_from(
        explicit: Option<&Path>,
        default_path: Option<&Path>,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        let path = match (explicit, default_path) {
            (Some(path), _) => path,
            (None, Some(path)) if path.exists() => path,
            (None, default_path) => {
                let missing = default_path.map(Path::to_path_buf);
                return Ok((Self::default(), ConfigSource::Defaults { missing }));
            }
        };
        let config = Self::from_file(path)?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json, &path.display().to_string())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::parse(json, "inline config")
    }

    fn parse(json: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        if !(physics.gravity > 0.0) {
            return Err(invalid("physics.gravity", "must be greater than 0"));
        }
        if !(physics.flap_velocity < 0.0) {
            return Err(invalid(
                "physics.flap_velocity",
                "must be negative (upward)",
            ));
        }
        if !(physics.obstacle_speed > 0.0) {
            return Err(invalid("physics.obstacle_speed", "must be greater than 0"));
        }
        if physics.spawn_interval_frames == 0 {
            return Err(invalid("physics.spawn_interval_frames", "must be at least 1"));
        }
        if self.frame_ms == 0 || self.frame_ms > MAX_FRAME_DELTA_MS {
            return Err(ConfigError::Invalid {
                field: "frame_ms",
                reason: format!("must be between 1 and {}", MAX_FRAME_DELTA_MS),
            });
        }
        if !(self.cell_width_px > 0.0) {
            return Err(invalid("cell_width_px", "must be greater than 0"));
        }
        if !(self.cell_height_px > 0.0) {
            return Err(invalid("cell_height_px", "must be greater than 0"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
