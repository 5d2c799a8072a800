//! Typed error definitions for renawin.
//! Configuration failures are detected before any traversal and surfaced to the
//! CLI boundary as one of these kinds; per-entry problems never use them.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenawinError {
    #[error("Given directory doesn't exist: {0}")]
    StartNotFound(PathBuf),

    #[error("Given path is not a directory: {0}")]
    StartNotDirectory(PathBuf),

    #[error("Given directory is empty: {0}")]
    StartEmpty(PathBuf),

    #[error(
        "A replacement parameter cannot contain any of the following characters: \\ / : * ? \" < > | (got '{0}')"
    )]
    InvalidReplacement(String),

    #[error("Invalid config file {path}: {reason}")]
    ConfigFile { path: PathBuf, reason: String },
}

impl RenawinError {
    /// Stable numeric code, handy for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            RenawinError::StartNotFound(_) => 10,
            RenawinError::StartNotDirectory(_) => 11,
            RenawinError::StartEmpty(_) => 12,
            RenawinError::InvalidReplacement(_) => 20,
            RenawinError::ConfigFile { .. } => 30,
        }
    }

    /// Short machine-friendly kind label.
    pub fn kind(&self) -> &'static str {
        match self {
            RenawinError::StartNotFound(_) => "start_not_found",
            RenawinError::StartNotDirectory(_) => "start_not_directory",
            RenawinError::StartEmpty(_) => "start_empty",
            RenawinError::InvalidReplacement(_) => "invalid_replacement",
            RenawinError::ConfigFile { .. } => "config_file",
        }
    }
}
