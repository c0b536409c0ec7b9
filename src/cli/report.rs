//! Security report command.

use std::path::Path;

use crate::cli::{context, output};
use crate::core::credentials::JsonCredentials;
use crate::error::Result;

/// Print the security report for a credential export.
pub fn execute(path: &Path, json: bool) -> Result<()> {
    let manager = context::open()?;
    let report = manager.generate_security_report(&JsonCredentials::new(path))?;

    if json {
        output::data(&serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::section("Security Report");
    output::kv("total:      ", report.total_passwords);
    output::kv("strong:     ", report.strong_passwords);
    output::kv("weak:       ", report.weak_passwords);
    output::kv("duplicate:  ", report.duplicate_passwords);
    output::kv("old:        ", report.old_passwords);
    output::kv("breached:   ", report.breached_passwords);
    output::kv("shared:     ", report.shared_passwords);

    output::section("Recommendations");
    for recommendation in &report.recommendations {
        if report.is_clean() {
            output::success(recommendation);
        } else {
            output::list_item(recommendation);
        }
    }

    Ok(())
}
