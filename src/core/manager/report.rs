//! Security report generation.

use tracing::debug;

use super::SecurityManager;
use crate::core::credentials::CredentialSource;
use crate::core::domain::{CredentialStats, SecurityReport};
use crate::error::Result;

impl SecurityManager {
    /// Summarize the vault's security posture.
    ///
    /// Quality counts come from the credential analyzer; breach and
    /// sharing counts come from the manager's own state. Nothing is
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns the credential source's error if the collection cannot be read.
    pub fn generate_security_report(&self, source: &dyn CredentialSource) -> Result<SecurityReport> {
        let credentials = source.credentials()?;
        let now = self.clock.now();
        let stats = self.analyzer.analyze(&credentials, now);

        let breached = self.state.breach_alerts.iter().filter(|a| !a.is_resolved()).count();
        let shared = self.state.shared_passwords.len();
        let expired = self
            .state
            .shared_passwords
            .iter()
            .filter(|g| !g.is_active(now))
            .count();

        let recommendations = recommend(
            &stats,
            breached,
            shared,
            expired,
            self.analyzer.max_age_days(),
        );

        debug!(
            total = stats.total,
            breached,
            shared,
            recommendations = recommendations.len(),
            "security report generated"
        );

        Ok(SecurityReport {
            total_passwords: stats.total,
            strong_passwords: stats.strong,
            weak_passwords: stats.weak,
            duplicate_passwords: stats.duplicate,
            old_passwords: stats.old,
            breached_passwords: breached,
            shared_passwords: shared,
            recommendations,
        })
    }
}

fn recommend(
    stats: &CredentialStats,
    breached: usize,
    shared: usize,
    expired: usize,
    max_age_days: Option<i64>,
) -> Vec<String> {
    let mut out = Vec::new();

    if breached > 0 {
        out.push(format!(
            "Change {} immediately: found in a known data breach",
            passwords(breached, "breached")
        ));
    }
    if stats.weak > 0 {
        out.push(format!(
            "Update {} to longer passphrases with mixed character types",
            passwords(stats.weak, "weak")
        ));
    }
    if stats.duplicate > 0 {
        out.push(format!(
            "Replace {} with unique values",
            passwords(stats.duplicate, "reused")
        ));
    }
    if stats.old > 0 {
        let age = match max_age_days {
            Some(days) => format!("older than {} days", days),
            None => "not changed recently".to_string(),
        };
        out.push(format!("Rotate {} {}", passwords(stats.old, ""), age));
    }
    if shared > 0 {
        let mut line = format!("Review {}", passwords(shared, "shared"));
        if expired > 0 {
            line.push_str(&format!(" ({} expired)", expired));
        }
        out.push(line);
    }

    if out.is_empty() {
        out.push("No action needed: your vault looks healthy".to_string());
    }
    out
}

/// "1 weak password", "3 weak passwords", "2 passwords".
fn passwords(count: usize, adjective: &str) -> String {
    let noun = if count == 1 { "password" } else { "passwords" };
    if adjective.is_empty() {
        format!("{} {}", count, noun)
    } else {
        format!("{} {} {}", count, adjective, noun)
    }
}
