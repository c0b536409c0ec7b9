//! Emergency access contacts.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::core::types::RecordId;

/// How much of the vault an emergency contact can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Limited,
    Full,
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessLevel::Limited => f.write_str("limited"),
            AccessLevel::Full => f.write_str("full"),
        }
    }
}

/// A trusted contact with delayed access to the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    id: RecordId,
    name: String,
    email: String,
    relationship: String,
    access_level: AccessLevel,
    /// Hours.
    waiting_period: u32,
}

impl EmergencyContact {
    pub(crate) fn new(id: RecordId, contact: NewContact) -> Self {
        Self {
            id,
            name: contact.name,
            email: contact.email,
            relationship: contact.relationship,
            access_level: contact.access_level,
            waiting_period: contact.waiting_period,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn relationship(&self) -> &str {
        &self.relationship
    }

    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    /// Delay before access is granted, in hours.
    pub fn waiting_period_hours(&self) -> u32 {
        self.waiting_period
    }

    pub fn waiting_period(&self) -> Duration {
        Duration::hours(i64::from(self.waiting_period))
    }
}

/// Input for registering an emergency contact.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub relationship: String,
    pub access_level: AccessLevel,
    pub waiting_period: u32,
}
