//! Name computation for Windows-friendly renames.
//!
//! Pure string helpers: forbidden-character substitution, root/extension
//! splitting and the "root(n)ext" suffix search. Nothing here touches the
//! filesystem; callers pass a snapshot of the sibling names they care about.

use std::collections::HashSet;
use tracing::trace;

/// Characters a Windows file or directory name cannot contain.
pub const FORBIDDEN_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Default starting index for the numeric suffix.
pub const DEFAULT_START_INDEX: u64 = 2;

/// Default replacement for forbidden characters.
pub const DEFAULT_REPLACEMENT: &str = "-";

#[inline]
pub fn is_forbidden(c: char) -> bool {
    FORBIDDEN_CHARS.contains(&c)
}

/// True if `s` contains at least one forbidden character.
pub fn contains_forbidden(s: &str) -> bool {
    s.chars().any(is_forbidden)
}

/// Replace every forbidden character in `name` with `replacement`.
///
/// An empty replacement simply deletes the characters.
pub fn sanitize_name(name: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if is_forbidden(c) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    out
}

/// Case-insensitive comparison key for a name.
#[inline]
pub fn fold_case(name: &str) -> String {
    name.to_lowercase()
}

/// Split a name into root and extension.
///
/// The extension begins at the last `.` and includes it. Leading dots never
/// start an extension, so dotfiles keep their whole name as root.
///
/// - "movie.mkv" -> ("movie", ".mkv")
/// - "archive.tar.gz" -> ("archive.tar", ".gz")
/// - ".env" -> (".env", "")
/// - "foo." -> ("foo", ".")
pub fn split_extension(name: &str) -> (&str, &str) {
    let Some(dot) = name.rfind('.') else {
        return (name, "");
    };
    // Only a dot preceded by something other than dots starts an extension.
    if name[..dot].chars().all(|c| c == '.') {
        return (name, "");
    }
    name.split_at(dot)
}

/// Format `root(index)ext` for the given name.
pub fn indexed_name(name: &str, index: u64) -> String {
    let (root, ext) = split_extension(name);
    format!("{root}({index}){ext}")
}

/// Find the first `root(n)ext` (n >= `start_index`) not present in `taken`.
///
/// `taken` must hold case-folded names (see [`fold_case`]). Returns the free
/// name together with `n + 1`, the hint for the next search of the same name.
pub fn next_free_name(candidate: &str, start_index: u64, taken: &HashSet<String>) -> (String, u64) {
    let mut index = start_index;
    loop {
        let numbered = indexed_name(candidate, index);
        if !taken.contains(&fold_case(&numbered)) {
            return (numbered, index.saturating_add(1));
        }
        if index - start_index == 3 {
            trace!(name = candidate, "naming: multiple suffix collisions, still searching");
        }
        index = index.saturating_add(1);
    }
}
