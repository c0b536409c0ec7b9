//! Tests for `strongroom history` commands.

use crate::support::*;

#[test]
fn test_track_and_list() {
    let t = Test::new();

    let output = t.run(&["history", "track", "bank", "--old", "hunter2", "--reason", "rotation"]);
    assert_success(&output);

    let output = t.run(&["history", "list", "bank"]);
    assert_success(&output);
    assert_stdout_contains(&output, "rotation");
    assert_stdout_excludes(&output, "hunter2");

    let output = t.run(&["history", "list", "bank", "--reveal"]);
    assert_stdout_contains(&output, "hunter2");
}

#[test]
fn test_old_password_sealed_in_snapshot() {
    let t = Test::new();
    assert_success(&t.run(&["history", "track", "bank", "--old", "hunter2"]));

    let raw = std::fs::read_to_string(t.snapshot_path()).unwrap();
    assert!(!raw.contains("hunter2"));
    assert_eq!(t.snapshot()["passwordHistory"][0]["passwordId"], "bank");
}

#[test]
fn test_old_password_from_stdin() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["history", "track", "bank"])
        .write_stdin("piped-old\n")
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.run(&["history", "list", "bank", "--reveal"]);
    assert_stdout_contains(&output, "piped-old");
}

#[test]
fn test_history_capped_at_ten() {
    let t = Test::new();

    for i in 0..12 {
        let old = format!("old-{}", i);
        assert_success(&t.run(&["history", "track", "bank", "--old", &old]));
    }

    let history = t.snapshot()["passwordHistory"].as_array().unwrap().len();
    assert_eq!(history, 10);
}

#[test]
fn test_empty_history() {
    let t = Test::new();
    let output = t.run(&["history", "list", "nothing"]);
    assert_success(&output);
    assert_stdout_contains(&output, "no history");
}
