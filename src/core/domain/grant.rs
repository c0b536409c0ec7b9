//! Credential sharing grants.
//!
//! The grant log is append-only. Expiry is a read-time predicate
//! ([`SharedPasswordGrant::is_active`]); expired grants are never removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{PasswordId, RecipientAddress, RecordId};

/// What a recipient may do with a shared credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    View,
    Edit,
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::View => f.write_str("view"),
            Permission::Edit => f.write_str("edit"),
        }
    }
}

/// Authorization for a third party to access one credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedPasswordGrant {
    id: RecordId,
    password_id: PasswordId,
    shared_with: RecipientAddress,
    permissions: Permission,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
    created: DateTime<Utc>,
}

impl SharedPasswordGrant {
    pub(crate) fn new(
        id: RecordId,
        password_id: PasswordId,
        shared_with: RecipientAddress,
        permissions: Permission,
        expires_at: Option<DateTime<Utc>>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            password_id,
            shared_with,
            permissions,
            expires_at,
            created,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn password_id(&self) -> &str {
        &self.password_id
    }

    pub fn shared_with(&self) -> &str {
        &self.shared_with
    }

    pub fn permissions(&self) -> Permission {
        self.permissions
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Whether the grant still authorizes access at `now`.
    ///
    /// A grant without expiry never lapses. A grant is still active at the
    /// exact expiry instant and inactive after it.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now <= expires_at,
            None => true,
        }
    }
}
