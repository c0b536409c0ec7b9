//! Password history commands.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{context, output};
use crate::error::Result;

/// Record a password change. The old password is prompted for (hidden)
/// or read from a pipe when not given.
pub fn track(password_id: &str, old: Option<String>, reason: &str) -> Result<()> {
    info!("Tracking password change: {}", password_id);
    let mut manager = context::open()?;

    let old = Zeroizing::new(match old {
        Some(old) => old,
        None if !io::stdin().is_terminal() => {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            input.trim_end_matches(['\r', '\n']).to_string()
        }
        None => Password::new()
            .with_prompt(format!("Previous password for {}", output::id(password_id)))
            .interact()?,
    });

    manager.track_password_change(password_id, &old, reason)?;
    let kept = manager.password_history(password_id).len();
    output::success(&format!(
        "tracked change for {} ({} kept)",
        output::id(password_id),
        kept
    ));
    Ok(())
}

/// List the history of one credential, oldest first.
pub fn list(password_id: &str, reveal: bool) -> Result<()> {
    let manager = context::open()?;
    let history = manager.password_history(password_id);

    if history.is_empty() {
        output::dimmed(&format!("no history for {}", password_id));
        return Ok(());
    }

    output::blank();
    output::header(&format!(
        "{} previous passwords for {}",
        output::count(history.len()),
        output::id(password_id)
    ));
    output::rule();
    for entry in history {
        let when = entry.changed_at().format("%Y-%m-%d %H:%M").to_string();
        if reveal {
            let old = manager.reveal_history_entry(entry.id())?;
            output::kv(&when, format!("{}  ({})", old.as_str(), entry.reason()));
        } else {
            output::kv(&when, entry.reason());
        }
    }

    Ok(())
}
