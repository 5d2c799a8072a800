#![cfg(unix)]
//! Whole-tree properties of a rename run: idempotence, forbidden-character
//! elimination, sibling uniqueness, depth bound, dry-run purity, symlink immunity.

use renawin::{Config, FORBIDDEN_CHARS, run};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use walkdir::WalkDir;

/// Build a messy tree with collisions at several levels.
fn messy_tree(root: &Path) {
    let files = [
        "a:b.txt",
        "a?b.txt",
        "a-b.txt",
        "x\\y",
        "q\"uote\".md",
        "lvl1:dir/pipe|name.log",
        "lvl1:dir/pipe-name.log",
        "lvl1:dir/lvl2*/deep<1>.bin",
        "lvl1:dir/lvl2*/deep>1<.bin",
        "lvl1-dir/already.txt",
    ];
    for f in files {
        let p = root.join(f);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(&p, f.as_bytes()).unwrap();
    }
}

/// Snapshot of every path (relative) and file contents under `root`.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            let body = e.file_type().is_file().then(|| fs::read(e.path()).unwrap());
            (rel, body)
        })
        .collect()
}

#[test]
fn second_run_is_a_no_op() {
    let td = tempdir().unwrap();
    messy_tree(td.path());
    let cfg = Config::new(td.path());

    let first = run(&cfg).unwrap();
    assert!(first.renamed > 0);
    let after_first = snapshot(td.path());

    let second = run(&cfg).unwrap();
    assert_eq!(second.renamed, 0);
    assert_eq!(snapshot(td.path()), after_first);
}

#[test]
fn no_forbidden_chars_and_no_case_insensitive_siblings_remain() {
    let td = tempdir().unwrap();
    messy_tree(td.path());

    run(&Config::new(td.path())).unwrap();

    for entry in WalkDir::new(td.path()).min_depth(1) {
        let entry = entry.unwrap();
        let name = entry.file_name().to_str().unwrap();
        assert!(
            !name.chars().any(|c| FORBIDDEN_CHARS.contains(&c)),
            "forbidden char left in {name}"
        );
        if entry.file_type().is_dir() {
            let mut seen = HashSet::new();
            for child in fs::read_dir(entry.path()).unwrap() {
                let n = child.unwrap().file_name().to_string_lossy().to_lowercase();
                assert!(seen.insert(n.clone()), "duplicate sibling {n}");
            }
        }
    }
    // Contents survive: every original file body is still somewhere in the tree.
    let bodies: HashSet<Vec<u8>> = snapshot(td.path()).into_values().flatten().collect();
    assert_eq!(bodies.len(), 10);
}

#[test]
fn depth_zero_renames_top_level_names_only() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("top?.txt"), b"").unwrap();
    fs::create_dir_all(td.path().join("sub:dir").join("inner*")).unwrap();
    fs::write(td.path().join("sub:dir").join("mid?.txt"), b"").unwrap();
    fs::write(td.path().join("sub:dir").join("inner*").join("deep?.txt"), b"").unwrap();

    let mut cfg = Config::new(td.path());
    cfg.max_depth = Some(0);
    run(&cfg).unwrap();

    assert!(td.path().join("top-.txt").exists());
    let sub = td.path().join("sub-dir");
    assert!(sub.is_dir());
    assert!(sub.join("mid?.txt").exists());
    assert!(sub.join("inner*").join("deep?.txt").exists());
}

#[test]
fn depth_one_stops_above_second_level() {
    let td = tempdir().unwrap();
    fs::create_dir_all(td.path().join("a").join("b")).unwrap();
    fs::write(td.path().join("a").join("one?.txt"), b"").unwrap();
    fs::write(td.path().join("a").join("b").join("two?.txt"), b"").unwrap();

    let mut cfg = Config::new(td.path());
    cfg.max_depth = Some(1);
    run(&cfg).unwrap();

    assert!(td.path().join("a").join("one-.txt").exists());
    assert!(td.path().join("a").join("b").join("two?.txt").exists());
}

#[test]
fn dry_run_changes_nothing() {
    let td = tempdir().unwrap();
    messy_tree(td.path());
    let before = snapshot(td.path());

    let mut cfg = Config::new(td.path());
    cfg.dry_run = true;
    let summary = run(&cfg).unwrap();

    assert_eq!(snapshot(td.path()), before);
    assert!(summary.renamed > 0, "planned renames are still counted");
}

#[test]
fn symlinks_are_not_followed_or_renamed() {
    let td = tempdir().unwrap();
    let outside = tempdir().unwrap();
    fs::write(outside.path().join("secret?.txt"), b"s").unwrap();
    fs::create_dir_all(td.path().join("nested")).unwrap();
    std::os::unix::fs::symlink(outside.path(), td.path().join("link:dir")).unwrap();
    std::os::unix::fs::symlink(outside.path(), td.path().join("nested").join("inner|link")).unwrap();
    fs::write(td.path().join("real?.txt"), b"r").unwrap();

    run(&Config::new(td.path())).unwrap();

    assert!(fs::symlink_metadata(td.path().join("link:dir")).unwrap().file_type().is_symlink());
    assert!(
        fs::symlink_metadata(td.path().join("nested").join("inner|link"))
            .unwrap()
            .file_type()
            .is_symlink()
    );
    assert!(outside.path().join("secret?.txt").exists());
    assert!(td.path().join("real-.txt").exists());
}
