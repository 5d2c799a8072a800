//! Filesystem operations: name computation, single-entry rename, tree walk.

pub mod naming;
mod rename;
mod run;
mod walk;

pub use rename::{report_line, RenameOutcome, RenameStatus, Renamer, UNPRINTABLE_REPORT};
pub use run::{base_dir, run, RunSummary};
pub use walk::traverse;
