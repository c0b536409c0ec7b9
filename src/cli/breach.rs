//! Breach scan and alert commands.

use std::path::Path;

use tracing::info;

use crate::cli::{context, output};
use crate::core::credentials::{CredentialSource, JsonCredentials};
use crate::core::domain::{BreachAlert, Severity};
use crate::error::Result;

/// Scan a credential export for breached passwords.
pub fn scan(path: &Path) -> Result<()> {
    info!("Scanning credentials: {}", path.display());
    let mut manager = context::open()?;
    let credentials = JsonCredentials::new(path).credentials()?;

    let alerts = manager.check_for_breaches(&credentials)?;

    if alerts.is_empty() {
        output::success(&format!(
            "no breached passwords in {} credentials",
            credentials.len()
        ));
        return Ok(());
    }

    output::warn(&format!(
        "{} of {} credentials found in breach data",
        alerts.len(),
        credentials.len()
    ));
    for alert in &alerts {
        print_alert(alert);
    }
    output::blank();
    output::hint("change these passwords, then run: strongroom breach resolve <id>");
    Ok(())
}

/// List breach alerts.
pub fn list(unresolved: bool, json: bool) -> Result<()> {
    let manager = context::open()?;
    let alerts: Vec<&BreachAlert> = if unresolved {
        manager.unresolved_alerts()
    } else {
        manager.breach_alerts().iter().collect()
    };

    if json {
        output::data(&serde_json::to_string_pretty(&alerts)?);
    } else if alerts.is_empty() {
        output::dimmed("no breach alerts");
    } else {
        output::blank();
        output::header(&format!("{} breach alerts", output::count(alerts.len())));
        output::rule();
        for alert in alerts {
            print_alert(alert);
        }
    }

    Ok(())
}

/// Mark an alert resolved.
pub fn resolve(id: &str) -> Result<()> {
    let mut manager = context::open()?;
    let alert = manager.resolve_breach_alert(id)?;
    output::success(&format!("resolved alert for {}", output::id(alert.password_id())));
    Ok(())
}

fn print_alert(alert: &BreachAlert) {
    let line = format!("{}  {}", output::id(alert.id()), alert);
    match alert.severity() {
        Severity::Critical | Severity::High if !alert.is_resolved() => output::warn(&line),
        _ => output::list_item(&line),
    }
}
