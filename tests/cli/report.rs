//! Tests for `strongroom report`, `enroll` and `completions`.

use crate::support::*;

#[test]
fn test_report_counts() {
    let t = Test::new();
    let credentials = t.credentials(MIXED_CREDENTIALS);
    assert_success(&t.breach_scan(&credentials));
    assert_success(&t.run(&["share", "add", "email", "bob@example.com"]));

    let report = json(&t.report_json(&credentials));

    assert_eq!(report["totalPasswords"], 4);
    assert_eq!(report["strongPasswords"], 2);
    assert_eq!(report["weakPasswords"], 2);
    assert_eq!(report["duplicatePasswords"], 2);
    assert_eq!(report["oldPasswords"], 1);
    assert_eq!(report["breachedPasswords"], 2);
    assert_eq!(report["sharedPasswords"], 1);
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 5);
}

#[test]
fn test_clean_report() {
    let t = Test::new();
    let credentials = t.credentials(CLEAN_CREDENTIALS);

    let output = t.run(&["report", &credentials.to_string_lossy()]);
    assert_success(&output);
    assert_stdout_contains(&output, "Security Report");
    assert_stdout_contains(&output, "No action needed");
}

#[test]
fn test_report_respects_configured_max_age() {
    let t = Test::new();
    std::fs::write(
        t.home.path().join("config.toml"),
        "[report]\nmax_age_days = 36500\n",
    )
    .unwrap();
    let credentials = t.credentials(MIXED_CREDENTIALS);

    let report = json(&t.report_json(&credentials));
    assert_eq!(report["oldPasswords"], 0);
}

#[test]
fn test_enroll_unsupported() {
    let t = Test::new();

    let output = t.run(&["enroll"]);
    assert_success(&output);
    assert_stdout_contains(&output, "not available");
}

#[test]
fn test_completions() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    assert_stdout_contains(&output, "strongroom");
}
