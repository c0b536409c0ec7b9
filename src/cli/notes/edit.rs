//! Note edit command.

use crate::cli::{context, output};
use crate::core::domain::NoteUpdate;
use crate::error::Result;

/// Edit a secure note. Tags, when given, replace the existing set.
pub fn execute(
    id: &str,
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let mut manager = context::open()?;

    let update = NoteUpdate {
        title,
        content,
        category,
        tags: if tags.is_empty() {
            None
        } else {
            Some(tags.into_iter().collect())
        },
    };

    if update.is_empty() {
        output::warn("nothing to change");
        return Ok(());
    }

    manager.update_secure_note(id, update)?;
    output::success(&format!("updated note {}", output::id(id)));
    Ok(())
}
