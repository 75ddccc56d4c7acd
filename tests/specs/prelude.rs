//! Shared helpers for CLI specs.

use assert_cmd::Command;
use std::io::Write;

/// The `dine` binary with logging forced off
pub fn dine() -> Command {
    let mut cmd = Command::cargo_bin("dine").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A short, seeded run that finishes well under a second
pub fn quick_run() -> Command {
    let mut cmd = dine();
    cmd.args(["run", "--actors", "5", "--duration", "200ms", "--jitter", "2ms", "--seed", "3"]);
    cmd
}

/// Write a config file into a fresh temp dir
pub fn config_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dine.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}
