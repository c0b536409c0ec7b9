//! Tests for `strongroom emergency` commands.

use crate::support::*;

#[test]
fn test_add_and_list_contact() {
    let t = Test::new();

    let output = t.run(&[
        "emergency",
        "add",
        "Dana",
        "dana@example.com",
        "--relationship",
        "sibling",
        "--access",
        "full",
        "--waiting-hours",
        "72",
    ]);
    assert_success(&output);

    let contacts = json(&t.run(&["emergency", "list", "--json"]));
    let contact = &contacts[0];
    assert_eq!(contact["name"], "Dana");
    assert_eq!(contact["accessLevel"], "full");
    assert_eq!(contact["waitingPeriod"], 72);
}

#[test]
fn test_invalid_email_rejected() {
    let t = Test::new();

    let output = t.run(&["emergency", "add", "Dana", "not-an-email"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid email");
}

#[test]
fn test_remove_contact() {
    let t = Test::new();
    assert_success(&t.run(&["emergency", "add", "Dana", "dana@example.com"]));

    let contacts = json(&t.run(&["emergency", "list", "--json"]));
    let id = contacts[0]["id"].as_str().unwrap().to_string();

    assert_success(&t.run(&["emergency", "rm", &id, "--yes"]));

    let output = t.run(&["emergency", "list"]);
    assert_stdout_contains(&output, "no emergency contacts");
}
