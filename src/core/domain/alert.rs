//! Breach alert types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{PasswordId, RecordId};

/// Severity of a breach alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reserved for manual classification; never derived from a category.
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Severity of a breach for a credential in `category`.
    ///
    /// `Finance` is critical, `Work` is high, everything else medium.
    /// Matching is exact.
    pub fn for_category(category: &str) -> Self {
        match category {
            "Finance" => Severity::Critical,
            "Work" => Severity::High,
            _ => Severity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A credential found in a breach dataset.
///
/// Only `resolved` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreachAlert {
    id: RecordId,
    password_id: PasswordId,
    breach_source: String,
    severity: Severity,
    detected_at: DateTime<Utc>,
    #[serde(default)]
    resolved: bool,
}

impl BreachAlert {
    /// A new, unresolved alert.
    pub(crate) fn new(
        id: RecordId,
        password_id: PasswordId,
        breach_source: String,
        severity: Severity,
        detected_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            password_id,
            breach_source,
            severity,
            detected_at,
            resolved: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Credential found in the breach.
    pub fn password_id(&self) -> &str {
        &self.password_id
    }

    pub fn breach_source(&self) -> &str {
        &self.breach_source
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn detected_at(&self) -> DateTime<Utc> {
        self.detected_at
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub(crate) fn resolve(&mut self) {
        self.resolved = true;
    }
}

impl std::fmt::Display for BreachAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} via {}",
            self.severity, self.password_id, self.breach_source
        )?;
        if self.resolved {
            write!(f, " (resolved)")?;
        }
        Ok(())
    }
}
