//! Depth-bounded, post-order directory walk.
//!
//! Every entry is visited as `(name, containing_dir)`. A directory is visited only
//! after its whole subtree, so its contents are always reached through the
//! directory's original name and renaming it afterwards cannot invalidate a
//! path still waiting to be visited. Symlinks are never visited or followed.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Walk `root`, calling `visit(name, dir)` for each entry below it.
///
/// `depth` is the number of directory levels to descend below `root`:
/// `Some(0)` visits only the direct entries of `root` (directories included),
/// `None` is unbounded. A root that is missing, not a directory or a symlink
/// produces no visits.
pub fn traverse<F>(root: &Path, depth: Option<usize>, mut visit: F)
where
    F: FnMut(&OsStr, &Path),
{
    match fs::symlink_metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(meta) => {
            debug!(root = %root.display(), symlink = meta.file_type().is_symlink(), "root is not a plain directory; nothing to walk");
            return;
        }
        Err(e) => {
            debug!(root = %root.display(), error = %e, "root not accessible; nothing to walk");
            return;
        }
    }

    // A sorter makes walkdir read each directory completely before yielding from it,
    // so renames inside a directory never disturb its listing.
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
        .sort_by_file_name();
    if let Some(d) = depth {
        walker = walker.max_depth(d.saturating_add(1));
    }

    for item in walker {
        let entry = match item {
            Ok(e) => e,
            Err(e) => {
                warn!(path = ?e.path(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.path_is_symlink() {
            trace!(path = %entry.path().display(), "skipping symlink");
            continue;
        }
        let Some(dir) = entry.path().parent() else {
            continue;
        };
        visit(entry.file_name(), dir);
    }
}
