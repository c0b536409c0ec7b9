//! Tests for `strongroom note` commands.

use crate::support::*;

fn first_note_id(t: &Test) -> String {
    let parsed = json(&t.note_list_json());
    parsed["notes"][0]["id"].as_str().unwrap().to_string()
}

#[test]
fn test_note_add_and_list() {
    let t = Test::new();

    assert_success(&t.note_add("Shopping", "milk"));

    let parsed = json(&t.note_list_json());
    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["notes"][0]["title"], "Shopping");
    assert_eq!(parsed["notes"][0]["encrypted"], false);
}

#[test]
fn test_encrypted_note_never_stored_in_plaintext() {
    let t = Test::new();

    assert_success(&t.note_add_encrypted("Recovery Codes", "ABC-123-XYZ"));

    let raw = std::fs::read_to_string(t.snapshot_path()).unwrap();
    assert!(!raw.contains("ABC-123-XYZ"));
    assert_eq!(t.snapshot()["secureNotes"][0]["encrypted"], true);
}

#[test]
fn test_note_show_reveal() {
    let t = Test::new();
    assert_success(&t.note_add_encrypted("Recovery Codes", "ABC-123-XYZ"));
    let id = first_note_id(&t);

    let hidden = t.run(&["note", "show", &id]);
    assert_success(&hidden);
    assert_stdout_excludes(&hidden, "ABC-123-XYZ");

    let revealed = t.run(&["note", "show", &id, "--reveal"]);
    assert_success(&revealed);
    assert_stdout_contains(&revealed, "ABC-123-XYZ");
}

#[test]
fn test_note_content_from_stdin() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["note", "add", "Piped", "--encrypt"])
        .write_stdin("from a pipe\n")
        .output()
        .unwrap();
    assert_success(&output);

    let id = first_note_id(&t);
    let revealed = t.run(&["note", "show", &id, "--reveal"]);
    assert_stdout_contains(&revealed, "from a pipe");
}

#[test]
fn test_note_with_attachment() {
    let t = Test::new();
    let file = t.home.path().join("scan.pdf");
    std::fs::write(&file, b"%PDF-1.7 secret scan").unwrap();

    let output = t.run(&[
        "note",
        "add",
        "Passport",
        "--content",
        "see attachment",
        "--attach",
        &file.to_string_lossy(),
    ]);
    assert_success(&output);

    let snapshot = t.snapshot();
    let attachment = &snapshot["secureNotes"][0]["attachments"][0];
    assert_eq!(attachment["name"], "scan.pdf");
    assert_eq!(attachment["type"], "application/pdf");
    assert_eq!(attachment["size"], 20);
    assert!(!attachment["encryptedData"]
        .as_str()
        .unwrap()
        .contains("secret scan"));
}

#[test]
fn test_blank_title_rejected() {
    let t = Test::new();

    let output = t.note_add("  ", "body");
    assert_failure(&output);
    assert_stderr_contains(&output, "title cannot be empty");
}

#[test]
fn test_note_edit() {
    let t = Test::new();
    assert_success(&t.note_add("Old title", "body"));
    let id = first_note_id(&t);

    assert_success(&t.run(&["note", "edit", &id, "--title", "New title", "--tag", "infra"]));

    let parsed = json(&t.note_list_json());
    assert_eq!(parsed["notes"][0]["title"], "New title");
    assert_eq!(parsed["notes"][0]["tags"][0], "infra");
}

#[test]
fn test_note_rm() {
    let t = Test::new();
    assert_success(&t.note_add("Temp", "body"));
    let id = first_note_id(&t);

    assert_success(&t.run(&["note", "rm", &id, "--yes"]));

    let parsed = json(&t.note_list_json());
    assert_eq!(parsed["count"], 0);
}
