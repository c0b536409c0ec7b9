//! Tests for `strongroom share` commands.

use crate::support::*;

#[test]
fn test_share_and_list() {
    let t = Test::new();

    let output = t.run(&["share", "add", "bank", "bob@example.com", "--edit"]);
    assert_success(&output);
    assert_stdout_contains(&output, "bob@example.com");

    let grants = json(&t.run(&["share", "list", "--json"]));
    let grants = grants.as_array().unwrap();
    assert_eq!(grants.len(), 1);
    assert_eq!(grants[0]["passwordId"], "bank");
    assert_eq!(grants[0]["sharedWith"], "bob@example.com");
    assert_eq!(grants[0]["permissions"], "edit");
    assert!(grants[0].get("expiresAt").is_none());
}

#[test]
fn test_share_with_expiry() {
    let t = Test::new();

    assert_success(&t.run(&[
        "share",
        "add",
        "bank",
        "bob@example.com",
        "--expires-in",
        "7",
    ]));

    let grants = json(&t.run(&["share", "list", "--active", "--json"]));
    let grants = grants.as_array().unwrap();
    assert_eq!(grants.len(), 1);
    assert!(grants[0]["expiresAt"].is_string());
    assert_eq!(grants[0]["permissions"], "view");
}

#[test]
fn test_share_blank_recipient_rejected() {
    let t = Test::new();

    let output = t.run(&["share", "add", "bank", ""]);
    assert_failure(&output);
    assert_stderr_contains(&output, "recipient cannot be empty");
}

#[test]
fn test_share_expiry_out_of_range_rejected() {
    let t = Test::new();

    let output = t.run(&[
        "share",
        "add",
        "bank",
        "bob@example.com",
        "--expires-in",
        "4000000000",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "invalid expires_in");
    assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));

    let grants = json(&t.run(&["share", "list", "--json"]));
    assert!(grants.as_array().unwrap().is_empty());
}
