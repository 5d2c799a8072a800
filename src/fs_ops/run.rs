use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::rename::{RenameOutcome, RenameStatus, Renamer};
use super::walk::traverse;
use crate::config::Config;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries handed to the renamer.
    pub visited: usize,
    /// Entries renamed, or planned in dry-run mode.
    pub renamed: usize,
    /// Entries left alone because their name is not valid Unicode.
    pub skipped_undecodable: usize,
    /// Entries whose rename failed with an I/O error.
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &RenameOutcome) {
        match outcome.status {
            RenameStatus::Renamed | RenameStatus::Planned => self.renamed += 1,
            RenameStatus::Undecodable => self.skipped_undecodable += 1,
            RenameStatus::Unchanged => {}
        }
    }
}

/// Absolute form of the start path, without resolving symlinks.
pub fn base_dir(start: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(start)
        .with_context(|| format!("Cannot make '{}' absolute", start.display()))?;
    Ok(dunce::simplified(&abs).to_path_buf())
}

/// Validate `config`, then rename every entry under its start path.
///
/// Per-entry failures are logged and counted; they never stop the walk.
/// Every call starts its suffix search from `config.start_index`.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;
    let base = base_dir(&config.start_path)?;
    let renamer = Renamer::from_config(config, &base);

    let mut summary = RunSummary::default();
    traverse(&base, config.max_depth, |name, dir| {
        summary.visited += 1;
        match renamer.rename(name, dir, config.start_index) {
            Ok(outcome) => summary.record(&outcome),
            Err(e) => {
                summary.failed += 1;
                warn!(name = ?name, dir = %dir.display(), error = %e, "rename failed; leaving entry as is");
            }
        }
    });

    info!(
        base = %base.display(),
        visited = summary.visited,
        renamed = summary.renamed,
        undecodable = summary.skipped_undecodable,
        failed = summary.failed,
        dry_run = config.dry_run,
        "Rename run completed"
    );
    Ok(summary)
}
