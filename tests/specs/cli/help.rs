use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    dine()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn run_help_documents_duration_flag() {
    dine()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--duration"))
        .stdout(predicate::str::contains("--seed"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    dine().assert().failure().code(2);
}
