//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - -n/--nono implies -v/--verbose: every planned rename is printed.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::config::validate_replacement;

/// Rename multiple files recursively in order to make them Windows-friendly.
/// CLI flags override config file values.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "renawin",
    version,
    about = "Rename multiple files recursively in order to make them Windows-friendly."
)]
pub struct Args {
    /// A path to the start dir. Default is the current working directory.
    #[arg(value_name = "PATH", default_value = ".", value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// Depth of recursion (default: infinite).
    #[arg(short = 'd', long, value_name = "N")]
    pub depth: Option<usize>,

    /// Start index for file name suffix (default: 2).
    #[arg(short = 'i', long = "start-index", value_name = "N")]
    pub start_index: Option<u64>,

    /// Replacement string for characters that a Windows file name cannot contain.
    /// Can be empty (default: - (hyphen)).
    #[arg(
        short = 'r',
        long,
        value_name = "S",
        allow_hyphen_values = true,
        value_parser = parse_replacement
    )]
    pub replacement: Option<String>,

    /// Verbose: print names of successfully renamed files.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// No action: print names of files to be renamed, but don't rename.
    #[arg(short = 'n', long)]
    pub nono: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(long)]
    pub debug: bool,

    /// Also append logs to this file.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the config file location used by renawin and exit.
    #[arg(long)]
    pub print_config: bool,
}

/// Value parser for -r/--replacement: reject forbidden characters at parse time.
fn parse_replacement(s: &str) -> Result<String, String> {
    validate_replacement(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        cfg.start_path = self.path.clone();
        if let Some(d) = self.depth {
            cfg.max_depth = Some(d);
        }
        if let Some(i) = self.start_index {
            cfg.start_index = i;
        }
        if let Some(r) = &self.replacement {
            cfg.replacement = r.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(f) = &self.log_file {
            cfg.log_file = Some(f.clone());
        }
        cfg.verbose |= self.verbose || self.nono;
        cfg.dry_run |= self.nono;
    }
}

pub fn parse() -> Args {
    Args::parse()
}
