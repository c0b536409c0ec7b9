//! Password history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{PasswordId, RecordId, SealedValue};

/// A prior value of a credential. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordHistoryEntry {
    id: RecordId,
    password_id: PasswordId,
    old_password: SealedValue,
    changed_at: DateTime<Utc>,
    reason: String,
}

impl PasswordHistoryEntry {
    pub(crate) fn new(
        id: RecordId,
        password_id: PasswordId,
        old_password: SealedValue,
        changed_at: DateTime<Utc>,
        reason: String,
    ) -> Self {
        Self {
            id,
            password_id,
            old_password,
            changed_at,
            reason,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Credential this entry belongs to.
    pub fn password_id(&self) -> &str {
        &self.password_id
    }

    /// Sealed previous password.
    pub fn old_password(&self) -> &str {
        &self.old_password
    }

    pub fn changed_at(&self) -> DateTime<Utc> {
        self.changed_at
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
