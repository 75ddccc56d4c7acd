use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn config_prints_default_toml() {
    dine()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("actors = 5"))
        .stdout(predicate::str::contains("monitor_interval = \"23ms\""));
}

#[test]
fn printed_config_is_accepted_by_run() {
    let output = dine().args(["config", "--actors", "3"]).output().unwrap();
    assert!(output.status.success());
    let (_dir, path) = config_file(&String::from_utf8(output.stdout).unwrap());

    dine()
        .args(["run", "--duration", "100ms", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Snapshots:"));
}
