//! `tracing` subscriber setup.
//!
//! The interactive game owns the terminal, so its log goes to a file in the
//! platform data directory. Headless commands log to stderr.

use crate::config::project_dirs;
use crate::error::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "flappy.log";

/// `RUST_LOG` wins over the configured level.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Append log lines to `flappy.log`. Returns the log file path.
pub fn init_file(default_level: &str) -> AppResult<PathBuf> {
    let dir = project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AppError::Logging("could not determine data directory".to_string()))?;
    fs::create_dir_all(&dir)?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(path)
}

pub fn init_stderr(default_level: &str) -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
