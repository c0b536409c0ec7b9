//! Credential sharing commands.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::cli::{context, output};
use crate::core::domain::{Permission, SharedPasswordGrant};
use crate::error::{Result, ValidationError};

/// Share a credential, optionally expiring after `expires_in` days.
pub fn add(
    password_id: &str,
    recipient: &str,
    permission: Permission,
    expires_in: Option<u32>,
) -> Result<()> {
    info!("Sharing {} with {}", password_id, recipient);
    let expires_at = expires_in.map(expiry_after).transpose()?;
    let mut manager = context::open()?;

    let grant = manager.share_password(password_id, recipient, permission, expires_at)?;

    output::success(&format!(
        "shared {} with {} ({})",
        output::id(password_id),
        recipient,
        permission
    ));
    if let Some(expires_at) = grant.expires_at() {
        output::dimmed(&format!("expires {}", expires_at.format("%Y-%m-%d %H:%M UTC")));
    }
    Ok(())
}

fn expiry_after(days: u32) -> Result<DateTime<Utc>> {
    Utc::now()
        .checked_add_signed(Duration::days(i64::from(days)))
        .ok_or_else(|| {
            ValidationError::Invalid {
                field: "expires_in",
                reason: format!("{} days is past the latest representable date", days),
            }
            .into()
        })
}

/// List sharing grants.
pub fn list(active: bool, json: bool) -> Result<()> {
    let manager = context::open()?;
    let grants: Vec<&SharedPasswordGrant> = if active {
        manager.active_grants()
    } else {
        manager.shared_passwords().iter().collect()
    };

    if json {
        output::data(&serde_json::to_string_pretty(&grants)?);
        return Ok(());
    }

    if grants.is_empty() {
        output::dimmed("no shared passwords");
        return Ok(());
    }

    let now = Utc::now();
    output::blank();
    output::header(&format!("{} grants", output::count(grants.len())));
    output::rule();
    for grant in grants {
        let status = match grant.expires_at() {
            None => "no expiry".to_string(),
            Some(_) if !grant.is_active(now) => "expired".to_string(),
            Some(at) => format!("until {}", at.format("%Y-%m-%d")),
        };
        output::kv(
            &output::id(grant.password_id()),
            format!("{} [{}] {}", grant.shared_with(), grant.permissions(), status),
        );
    }
    Ok(())
}
