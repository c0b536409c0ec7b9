//! Tests for `strongroom breach` commands.

use crate::support::*;

#[test]
fn test_scan_reports_breached() {
    let t = Test::new();
    let credentials = t.credentials(MIXED_CREDENTIALS);

    let output = t.breach_scan(&credentials);
    assert_success(&output);
    assert_stdout_contains(&output, "2 of 4");

    let alerts = json(&t.breach_list_json());
    let alerts = alerts.as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0]["passwordId"], "bank");
    assert_eq!(alerts[0]["severity"], "critical");
    assert_eq!(alerts[1]["passwordId"], "vpn");
    assert_eq!(alerts[1]["severity"], "high");
    assert_eq!(alerts[1]["breachSource"], "Data Breach Database");
}

#[test]
fn test_rescan_duplicates_alerts() {
    let t = Test::new();
    let credentials = t.credentials(MIXED_CREDENTIALS);

    assert_success(&t.breach_scan(&credentials));
    assert_success(&t.breach_scan(&credentials));

    let alerts = json(&t.breach_list_json());
    assert_eq!(alerts.as_array().unwrap().len(), 4);
}

#[test]
fn test_clean_scan() {
    let t = Test::new();
    let credentials = t.credentials(CLEAN_CREDENTIALS);

    let output = t.breach_scan(&credentials);
    assert_success(&output);
    assert_stdout_contains(&output, "no breached passwords");
}

#[test]
fn test_resolve_alert() {
    let t = Test::new();
    let credentials = t.credentials(MIXED_CREDENTIALS);
    assert_success(&t.breach_scan(&credentials));

    let alerts = json(&t.breach_list_json());
    let id = alerts[0]["id"].as_str().unwrap().to_string();
    assert_success(&t.run(&["breach", "resolve", &id]));

    let unresolved = json(&t.run(&["breach", "list", "--unresolved", "--json"]));
    let unresolved = unresolved.as_array().unwrap();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0]["passwordId"], "vpn");
}

#[test]
fn test_custom_breach_list_from_config() {
    let t = Test::new();
    std::fs::write(
        t.home.path().join("leaks.txt"),
        "# corporate leak\nc0rrect-H0rse-Battery!\n",
    )
    .unwrap();
    std::fs::write(
        t.home.path().join("config.toml"),
        "[breach]\nlist = \"leaks.txt\"\nsource = \"Corporate Leak\"\n",
    )
    .unwrap();
    let credentials = t.credentials(MIXED_CREDENTIALS);

    let output = t.breach_scan(&credentials);
    assert_success(&output);
    assert_stdout_contains(&output, "4 of 4");

    let alerts = json(&t.breach_list_json());
    assert_eq!(alerts[0]["breachSource"], "Corporate Leak");
}
