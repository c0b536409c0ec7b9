//! Primary credential records.
//!
//! Read-only view of the externally owned credential collection.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use zeroize::Zeroize;

use crate::core::types::PasswordId;

/// One credential from the primary collection.
///
/// The password is wiped from memory when the record is dropped.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: PasswordId,
    pub password: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub last_changed: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn new(
        id: impl Into<String>,
        password: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
            category: category.into(),
            last_changed: None,
        }
    }

    pub fn last_changed(mut self, at: DateTime<Utc>) -> Self {
        self.last_changed = Some(at);
        self
    }
}

impl Drop for Credential {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("password", &"<redacted>")
            .field("category", &self.category)
            .field("last_changed", &self.last_changed)
            .finish()
    }
}

/// Quality counts over a credential collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialStats {
    pub total: usize,
    pub strong: usize,
    pub weak: usize,
    pub duplicate: usize,
    pub old: usize,
}
