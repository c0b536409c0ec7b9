//! Note rm command.

use dialoguer::Confirm;
use tracing::info;

use crate::cli::{context, output};
use crate::error::Result;

/// Delete a secure note.
pub fn execute(id: &str, yes: bool) -> Result<()> {
    info!("Removing secure note: {}", id);
    let mut manager = context::open()?;

    if !yes {
        let title = manager
            .secure_note(id)
            .map(|n| n.title().to_string())
            .unwrap_or_else(|| id.to_string());
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete note '{}'?", title))
            .default(false)
            .interact()?;
        if !confirmed {
            output::dimmed("cancelled");
            return Ok(());
        }
    }

    let removed = manager.delete_secure_note(id)?;
    output::success(&format!("deleted {}", removed.title()));
    Ok(())
}
