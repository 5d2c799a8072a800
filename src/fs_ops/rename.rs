//! Rename one directory entry to a Windows-friendly, collision-free name.
//!
//! Policy:
//! - Forbidden characters are replaced by the configured replacement.
//! - A name that is already clean is left alone unless another sibling matches it
//!   case-insensitively; such duplicates are disambiguated like any collision.
//! - Collisions are resolved with "root(n)ext", n counting up from the start index.
//! - Names that are not valid Unicode are skipped and left as they are.
//!
//! Collision checks use a snapshot of the sibling names taken once per call.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::naming::{fold_case, next_free_name, sanitize_name};
use crate::config::Config;
use crate::output as out;

/// Placeholder report line for paths that cannot be rendered as text.
pub const UNPRINTABLE_REPORT: &str = "rename(<<Unicode filename>>)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameStatus {
    /// Name was already Windows-friendly and unique.
    Unchanged,
    /// Entry was renamed on disk.
    Renamed,
    /// Dry-run: the rename was computed and reported but not applied.
    Planned,
    /// Name is not valid Unicode; entry skipped.
    Undecodable,
}

/// Result of one rename request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    /// Name the entry has (or would have) after the call.
    pub final_name: OsString,
    /// Index to start from for the next search of the same name.
    pub next_index: u64,
    pub status: RenameStatus,
}

impl RenameOutcome {
    fn keep(name: &OsStr, next_index: u64, status: RenameStatus) -> Self {
        Self {
            final_name: name.to_os_string(),
            next_index,
            status,
        }
    }

    /// True if the name changed (on disk or, for dry-run, on paper).
    pub fn changed(&self) -> bool {
        matches!(self.status, RenameStatus::Renamed | RenameStatus::Planned)
    }
}

/// Applies the rename policy to single entries.
#[derive(Debug, Clone)]
pub struct Renamer {
    replacement: String,
    dry_run: bool,
    report: bool,
    base_dir: PathBuf,
}

impl Renamer {
    /// `base_dir` is the directory report lines are made relative to.
    pub fn new(replacement: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            replacement: replacement.into(),
            dry_run: false,
            report: false,
            base_dir: base_dir.into(),
        }
    }

    pub fn from_config(cfg: &Config, base_dir: impl Into<PathBuf>) -> Self {
        Self::new(cfg.replacement.clone(), base_dir)
            .dry_run(cfg.dry_run)
            .report(cfg.report())
    }

    /// Compute and report renames without applying them. Implies reporting.
    pub fn dry_run(mut self, yes: bool) -> Self {
        self.dry_run = yes;
        self.report |= yes;
        self
    }

    pub fn report(mut self, yes: bool) -> Self {
        self.report = yes || self.dry_run;
        self
    }

    /// Rename `name` inside `dir`, starting the suffix search at `start_index`.
    ///
    /// Errors are I/O failures (listing `dir` or the rename itself); the entry
    /// keeps its original name in that case.
    pub fn rename(&self, name: &OsStr, dir: &Path, start_index: u64) -> io::Result<RenameOutcome> {
        let Some(name_str) = name.to_str() else {
            debug!(name = ?name, dir = %dir.display(), "skipping undecodable name");
            return Ok(RenameOutcome::keep(name, start_index, RenameStatus::Undecodable));
        };

        let candidate = sanitize_name(name_str, &self.replacement);
        let siblings = sibling_names(dir)?;

        let folded = fold_case(name_str);
        let same_name = siblings.iter().filter(|s| **s == folded).count();
        if candidate == name_str && same_name <= 1 {
            trace!(name = name_str, "name already Windows-friendly");
            return Ok(RenameOutcome::keep(name, start_index, RenameStatus::Unchanged));
        }

        let taken: HashSet<String> = siblings.into_iter().collect();
        let (final_name, next_index) =
            if is_unusable(&candidate) || taken.contains(&fold_case(&candidate)) {
                next_free_name(&candidate, start_index, &taken)
            } else {
                (candidate, start_index)
            };

        let old_path = dir.join(name);
        let new_path = dir.join(&final_name);
        if !self.dry_run {
            fs::rename(&old_path, &new_path)?;
        }
        debug!(
            from = %old_path.display(),
            to = %new_path.display(),
            dry_run = self.dry_run,
            "renamed entry"
        );
        if self.report {
            out::print_user(&report_line(&self.base_dir, &old_path, &new_path));
        }

        let status = if self.dry_run {
            RenameStatus::Planned
        } else {
            RenameStatus::Renamed
        };
        Ok(RenameOutcome {
            final_name: OsString::from(final_name),
            next_index,
            status,
        })
    }
}

/// Empty names and the dot entries can never be used as-is.
fn is_unusable(candidate: &str) -> bool {
    matches!(candidate, "" | "." | "..")
}

/// Case-folded names of every entry in `dir`.
fn sibling_names(dir: &Path) -> io::Result<Vec<String>> {
    fs::read_dir(dir)?
        .map(|entry| entry.map(|e| fold_case(&e.file_name().to_string_lossy())))
        .collect()
}

/// `rename(<old>, <new>)` with both paths relative to `base`.
pub fn report_line(base: &Path, old: &Path, new: &Path) -> String {
    let rel = |p: &Path| p.strip_prefix(base).unwrap_or(p).to_str().map(str::to_owned);
    match (rel(old), rel(new)) {
        (Some(o), Some(n)) => format!("rename({o}, {n})"),
        _ => UNPRINTABLE_REPORT.to_string(),
    }
}
