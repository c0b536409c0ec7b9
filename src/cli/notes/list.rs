//! Note list command.

use crate::cli::{context, output};
use crate::error::Result;

/// List secure notes.
pub fn execute(json: bool) -> Result<()> {
    let manager = context::open()?;
    let notes = manager.secure_notes();

    if json {
        let notes_json: Vec<_> = notes
            .iter()
            .map(|n| {
                serde_json::json!({
                    "id": n.id(),
                    "title": n.title(),
                    "category": n.category(),
                    "tags": n.tags(),
                    "encrypted": n.is_encrypted(),
                    "attachments": n.attachments().len(),
                    "lastModified": n.last_modified(),
                })
            })
            .collect();

        let result = serde_json::json!({
            "notes": notes_json,
            "count": notes.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else if notes.is_empty() {
        output::dimmed("no secure notes");
    } else {
        output::blank();
        output::header(&format!("{} secure notes", output::count(notes.len())));
        output::rule();
        for note in notes {
            let lock = if note.is_encrypted() { " [encrypted]" } else { "" };
            output::kv(&output::id(note.id()), format!("{}{}", note.title(), lock));
        }
    }

    Ok(())
}
