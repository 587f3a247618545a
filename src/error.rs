//! Application-level errors surfaced by the binary.

use crate::config::ConfigError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not set up logging: {0}")]
    Logging(String),
}

pub type AppResult<T> = Result<T, AppError>;
