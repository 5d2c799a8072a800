//! Core library for `renawin`.
//!
//! Walks a directory tree and renames entries whose names contain characters
//! Windows cannot store, replacing them and resolving the resulting name
//! collisions with a numeric suffix.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;

pub use config::{
    Config, FileSettings, LogLevel, default_config_path, default_log_path, path_has_symlink_ancestor,
};
pub use errors::RenawinError;
pub use fs_ops::naming::{FORBIDDEN_CHARS, contains_forbidden, sanitize_name};
pub use fs_ops::{RenameOutcome, RenameStatus, Renamer, RunSummary, run, traverse};
