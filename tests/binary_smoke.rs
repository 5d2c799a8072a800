//! Drive the compiled binary: report lines, exit codes, config file pickup.

use assert_cmd::cargo;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Command with an isolated, empty config so the user's own file is never read.
fn renawin(cfg_dir: &Path) -> Command {
    let cfg = cfg_dir.join("config.xml");
    if !cfg.exists() {
        fs::write(&cfg, "<config></config>").unwrap();
    }
    let mut cmd = Command::new(cargo::cargo_bin!("renawin"));
    cmd.env("RENAWIN_CONFIG", &cfg);
    cmd
}

#[test]
fn version_flag_prints_name_and_version() {
    let cfg = tempdir().unwrap();
    let out = renawin(cfg.path()).arg("-V").output().expect("spawn binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("renawin 0.1.0"), "stdout: {stdout}");
}

#[test]
fn empty_directory_fails_before_walking() {
    let cfg = tempdir().unwrap();
    let target = tempdir().unwrap();
    let out = renawin(cfg.path()).arg(target.path()).output().expect("spawn binary");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("empty"), "stderr: {stderr}");
}

#[test]
fn missing_directory_fails() {
    let cfg = tempdir().unwrap();
    let out = renawin(cfg.path())
        .arg(cfg.path().join("does-not-exist"))
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("doesn't exist"), "stderr: {stderr}");
}

#[test]
fn forbidden_replacement_is_a_usage_error() {
    let cfg = tempdir().unwrap();
    let target = tempdir().unwrap();
    fs::write(target.path().join("keep.txt"), b"").unwrap();
    let out = renawin(cfg.path())
        .args(["-r", ":"])
        .arg(target.path())
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("replacement"), "stderr: {stderr}");
}

#[cfg(unix)]
#[test]
fn nono_reports_without_renaming() {
    let cfg = tempdir().unwrap();
    let target = tempdir().unwrap();
    fs::create_dir_all(target.path().join("sub")).unwrap();
    fs::write(target.path().join("sub").join("what?.txt"), b"").unwrap();

    let out = renawin(cfg.path()).arg("-n").arg(target.path()).output().expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), "rename(sub/what?.txt, sub/what-.txt)");
    assert!(target.path().join("sub").join("what?.txt").exists());
}

#[cfg(unix)]
#[test]
fn verbose_reports_and_renames() {
    let cfg = tempdir().unwrap();
    let target = tempdir().unwrap();
    fs::write(target.path().join("a*b.txt"), b"").unwrap();

    let out = renawin(cfg.path())
        .args(["-v", "-r", ""])
        .arg(target.path())
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), "rename(a*b.txt, ab.txt)");
    assert!(target.path().join("ab.txt").exists());
}

#[cfg(unix)]
#[test]
fn quiet_run_prints_nothing_on_stdout() {
    let cfg = tempdir().unwrap();
    let target = tempdir().unwrap();
    fs::write(target.path().join("x|y"), b"").unwrap();

    let out = renawin(cfg.path()).arg(target.path()).output().expect("spawn binary");

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(target.path().join("x-y").exists());
}

#[cfg(unix)]
#[test]
fn config_file_supplies_replacement_and_cli_wins() {
    let cfg = tempdir().unwrap();
    fs::write(
        cfg.path().join("config.xml"),
        "<config>\n  <replacement>_</replacement>\n  <log_level>quiet</log_level>\n</config>",
    )
    .unwrap();
    let target = tempdir().unwrap();
    fs::write(target.path().join("a:b"), b"").unwrap();
    fs::write(target.path().join("c:d"), b"").unwrap();

    let out = renawin(cfg.path()).arg("-d").arg("0").arg(target.path()).output().expect("spawn binary");
    assert!(out.status.success());
    assert!(target.path().join("a_b").exists());
    assert!(target.path().join("c_d").exists());

    fs::write(target.path().join("e:f"), b"").unwrap();
    let out = renawin(cfg.path()).args(["-r", "+"]).arg(target.path()).output().expect("spawn binary");
    assert!(out.status.success());
    assert!(target.path().join("e+f").exists());
}

#[test]
fn malformed_config_file_is_fatal() {
    let cfg = tempdir().unwrap();
    fs::write(cfg.path().join("config.xml"), "<config><bogus>1</bogus></config>").unwrap();
    let target = tempdir().unwrap();
    fs::write(target.path().join("keep.txt"), b"").unwrap();

    let out = renawin(cfg.path()).arg(target.path()).output().expect("spawn binary");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("config"), "stderr: {stderr}");
}

#[test]
fn print_config_shows_env_path() {
    let cfg = tempdir().unwrap();
    let out = renawin(cfg.path()).arg("--print-config").output().expect("spawn binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("RENAWIN_CONFIG"), "stdout: {stdout}");
}
