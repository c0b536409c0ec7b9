//! Security posture report.

use serde::Serialize;

/// Derived summary of the vault's security posture.
///
/// Recomputed on every request and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    pub total_passwords: usize,
    pub strong_passwords: usize,
    pub weak_passwords: usize,
    pub duplicate_passwords: usize,
    pub old_passwords: usize,
    /// Unresolved breach alerts.
    pub breached_passwords: usize,
    /// All grants ever issued, active or not.
    pub shared_passwords: usize,
    pub recommendations: Vec<String>,
}

impl SecurityReport {
    /// True when the report found nothing to act on.
    pub fn is_clean(&self) -> bool {
        self.weak_passwords == 0
            && self.duplicate_passwords == 0
            && self.old_passwords == 0
            && self.breached_passwords == 0
    }
}
