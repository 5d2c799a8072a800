//! Core configuration types.
//! - Config holds one invocation's settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::fs_ops::naming::{DEFAULT_REPLACEMENT, DEFAULT_START_INDEX};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Settings for one rename run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the walk starts from
    pub start_path: PathBuf,
    /// Extra directory levels to descend below `start_path`; None = unbounded
    pub max_depth: Option<usize>,
    /// First numeric suffix tried when a name collides
    pub start_index: u64,
    /// Substitute for forbidden characters (may be empty)
    pub replacement: String,
    /// Print a line for every rename
    pub verbose: bool,
    /// Compute and report renames without touching the filesystem
    pub dry_run: bool,
    /// Diagnostic verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_path: PathBuf::from("."),
            max_depth: None,
            start_index: DEFAULT_START_INDEX,
            replacement: DEFAULT_REPLACEMENT.to_string(),
            verbose: false,
            dry_run: false,
            log_level: LogLevel::Normal,
            log_file: None,
        }
    }
}

impl Config {
    /// Construct a Config for `start_path`; other fields use defaults.
    pub fn new(start_path: impl Into<PathBuf>) -> Self {
        Self {
            start_path: start_path.into(),
            ..Default::default()
        }
    }

    /// Dry-run always implies reporting.
    #[inline]
    pub fn report(&self) -> bool {
        self.verbose || self.dry_run
    }
}
