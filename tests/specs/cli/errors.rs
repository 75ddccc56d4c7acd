use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn zero_actors_fails_with_suggestion() {
    dine()
        .args(["run", "--actors", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ring of 0 actors"))
        .stderr(predicate::str::contains("suggestions:"));
}

#[test]
fn missing_config_file_fails() {
    dine()
        .args(["run", "--config", "/nonexistent/dine.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn malformed_config_file_fails() {
    let (_dir, path) = config_file("actors = \"five\"\n");
    dine()
        .args(["run", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn bad_duration_is_a_usage_error() {
    dine()
        .args(["run", "--duration", "soon"])
        .assert()
        .failure()
        .code(2);
}
