use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn run_prints_per_actor_rounds() {
    quick_run()
        .assert()
        .success()
        .stdout(predicate::str::contains("ACTOR"))
        .stdout(predicate::str::contains("ROUNDS"))
        .stdout(predicate::str::contains("Rounds:"))
        .stdout(predicate::str::contains("Violations").not());
}

#[test]
fn run_json_report_is_machine_readable() {
    let output = quick_run().args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["actors"], 5);
    assert_eq!(report["rounds"].as_array().unwrap().len(), 5);
    assert_eq!(report["violations"], 0);
    assert!(report["first_violation"].is_null());
    assert!(report["snapshots"].as_u64().unwrap() > 0);
}

#[test]
fn single_actor_ring_runs() {
    dine()
        .args(["run", "-n", "1", "--duration", "50ms", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"actors\": 1"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    quick_run()
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("simulation finished"))
        .stdout(predicate::str::contains("simulation finished").not());
}
