//! Config validation logic.
//! Runs before any traversal; every failure is a typed `RenawinError` so the
//! CLI boundary decides how to report it and tests can match on the kind.

use std::fs;
use std::path::Path;
use tracing::{debug, error};

use crate::errors::RenawinError;
use crate::fs_ops::naming::contains_forbidden;

use super::types::Config;

impl Config {
    /// Validate the start directory and the replacement string.
    pub fn validate(&self) -> Result<(), RenawinError> {
        validate_replacement(&self.replacement)?;
        ensure_start_dir(&self.start_path)?;
        debug!(
            start = %self.start_path.display(),
            replacement = %self.replacement,
            start_index = self.start_index,
            "config validated"
        );
        Ok(())
    }
}

/// Reject a replacement that itself contains a forbidden character.
pub fn validate_replacement(replacement: &str) -> Result<(), RenawinError> {
    if contains_forbidden(replacement) {
        error!(replacement, "replacement contains forbidden characters");
        return Err(RenawinError::InvalidReplacement(replacement.to_string()));
    }
    Ok(())
}

/// Start path must exist, be a directory and have at least one entry.
fn ensure_start_dir(path: &Path) -> Result<(), RenawinError> {
    let meta = fs::metadata(path).map_err(|_| RenawinError::StartNotFound(path.to_path_buf()))?;
    if !meta.is_dir() {
        return Err(RenawinError::StartNotDirectory(path.to_path_buf()));
    }
    let mut entries =
        fs::read_dir(path).map_err(|_| RenawinError::StartNotFound(path.to_path_buf()))?;
    if entries.next().is_none() {
        return Err(RenawinError::StartEmpty(path.to_path_buf()));
    }
    Ok(())
}
