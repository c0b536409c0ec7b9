//! Note show command.

use crate::cli::{context, output};
use crate::error::{RecordError, Result};

/// Show a secure note.
pub fn execute(id: &str, reveal: bool) -> Result<()> {
    let manager = context::open()?;
    let note = manager
        .secure_note(id)
        .ok_or_else(|| RecordError::not_found("secure note", id))?;

    output::section(note.title());
    output::kv("id:        ", note.id());
    output::kv("category:  ", note.category());
    if !note.tags().is_empty() {
        let tags: Vec<_> = note.tags().iter().map(String::as_str).collect();
        output::kv("tags:      ", tags.join(", "));
    }
    output::kv("created:   ", note.created().to_rfc3339());
    output::kv("modified:  ", note.last_modified().to_rfc3339());
    for attachment in note.attachments() {
        output::list_item(&format!(
            "{} ({}, {} bytes)",
            attachment.name(),
            attachment.kind(),
            attachment.size()
        ));
    }
    output::blank();

    if note.is_encrypted() && !reveal {
        output::dimmed("body encrypted, pass --reveal to show it");
    } else {
        let body = manager.reveal_note(id)?;
        output::data(&body);
    }

    Ok(())
}
