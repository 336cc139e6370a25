//! Transporter booth: startup error types.

use booth_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the console front end.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The destinations file is not valid YAML for the expected shape.
    #[error("destinations file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Reading a file or the terminal failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The destination list or starting booth is unusable.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
