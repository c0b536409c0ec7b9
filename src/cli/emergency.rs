//! Emergency contact commands.

use dialoguer::Confirm;
use tracing::info;

use crate::cli::{context, output};
use crate::core::domain::{AccessLevel, NewContact};
use crate::error::Result;

/// Add an emergency contact.
pub fn add(
    name: String,
    email: String,
    relationship: String,
    access_level: AccessLevel,
    waiting_period: u32,
) -> Result<()> {
    info!("Adding emergency contact: {}", name);
    let mut manager = context::open()?;

    let contact = manager.setup_emergency_contact(NewContact {
        name,
        email,
        relationship,
        access_level,
        waiting_period,
    })?;

    output::success(&format!(
        "added {} ({} access after {}h)",
        contact.name(),
        contact.access_level(),
        contact.waiting_period_hours()
    ));
    Ok(())
}

/// List emergency contacts.
pub fn list(json: bool) -> Result<()> {
    let manager = context::open()?;
    let contacts = manager.emergency_contacts();

    if json {
        output::data(&serde_json::to_string_pretty(contacts)?);
    } else if contacts.is_empty() {
        output::dimmed("no emergency contacts");
    } else {
        output::blank();
        output::header(&format!(
            "{} emergency contacts",
            output::count(contacts.len())
        ));
        output::rule();
        for contact in contacts {
            output::kv(
                &output::id(contact.id()),
                format!(
                    "{} <{}> {} access, {}h wait",
                    contact.name(),
                    contact.email(),
                    contact.access_level(),
                    contact.waiting_period_hours()
                ),
            );
        }
    }

    Ok(())
}

/// Remove an emergency contact.
pub fn rm(id: &str, yes: bool) -> Result<()> {
    let mut manager = context::open()?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove emergency contact {}?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            output::dimmed("cancelled");
            return Ok(());
        }
    }

    let removed = manager.remove_emergency_contact(id)?;
    output::success(&format!("removed {}", removed.name()));
    Ok(())
}
