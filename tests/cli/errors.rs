//! Error reporting tests.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_unknown_note() {
    let t = Test::new();

    t.cmd()
        .args(["note", "show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("secure note not found: missing"));
}

#[test]
fn test_missing_credentials_file() {
    let t = Test::new();
    let missing = t.home.path().join("nope.json");

    let output = t.breach_scan(&missing);
    assert_failure(&output);
    assert_stderr_contains(&output, "credential source failed");
}

#[test]
fn test_invalid_config() {
    let t = Test::new();
    std::fs::write(t.home.path().join("config.toml"), "[report]\nmax_age_days = 0\n").unwrap();

    let output = t.run(&["note", "list"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "report.max_age_days");
    assert_stderr_contains(&output, "config.toml");
}

#[test]
fn test_newer_snapshot_rejected() {
    let t = Test::new();
    std::fs::write(t.snapshot_path(), r#"{"version": 99}"#).unwrap();

    t.cmd()
        .args(["note", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("version 99"));
}

#[test]
fn test_identity_reused_across_runs() {
    let t = Test::new();
    assert_success(&t.note_add_encrypted("Wifi", "hunter2"));
    let key = std::fs::read_to_string(t.home.path().join("identity.key")).unwrap();

    assert_success(&t.note_add("Other", "x"));
    let again = std::fs::read_to_string(t.home.path().join("identity.key")).unwrap();
    assert_eq!(key, again);
}
