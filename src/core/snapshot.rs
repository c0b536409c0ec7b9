//! Serialized state of the five owned collections.
//!
//! Written wholesale to the snapshot store after every mutation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants::SNAPSHOT_VERSION;
use crate::core::domain::{
    BreachAlert, EmergencyContact, PasswordHistoryEntry, SecureNote, SharedPasswordGrant,
};
use crate::error::{Result, StoreError};

fn legacy_version() -> u32 {
    1
}

/// Everything the security manager persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Document format version. Documents written before versioning read as 1.
    #[serde(default = "legacy_version")]
    pub version: u32,
    #[serde(default)]
    pub secure_notes: Vec<SecureNote>,
    #[serde(default)]
    pub password_history: Vec<PasswordHistoryEntry>,
    #[serde(default)]
    pub breach_alerts: Vec<BreachAlert>,
    #[serde(default)]
    pub shared_passwords: Vec<SharedPasswordGrant>,
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            secure_notes: Vec::new(),
            password_history: Vec::new(),
            breach_alerts: Vec::new(),
            shared_passwords: Vec::new(),
            emergency_contacts: Vec::new(),
        }
    }
}

impl Snapshot {
    /// Parse a stored document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` for malformed JSON and
    /// `StoreError::UnsupportedVersion` for documents from a newer release.
    pub fn from_document(document: &str) -> Result<Self> {
        let mut snapshot: Self = serde_json::from_str(document).map_err(StoreError::Parse)?;

        if snapshot.version > SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            }
            .into());
        }
        snapshot.version = SNAPSHOT_VERSION;

        debug!(
            notes = snapshot.secure_notes.len(),
            history = snapshot.password_history.len(),
            alerts = snapshot.breach_alerts.len(),
            grants = snapshot.shared_passwords.len(),
            contacts = snapshot.emergency_contacts.len(),
            "snapshot parsed"
        );

        Ok(snapshot)
    }

    /// Serialize for storage.
    pub fn to_document(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| StoreError::Serialize(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::Severity;
    use chrono::Utc;

    #[test]
    fn test_empty_document_is_default() {
        let snapshot = Snapshot::from_document("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_document_keeps_collections() {
        let mut snapshot = Snapshot::default();
        snapshot.breach_alerts.push(BreachAlert::new(
            "a1".to_string(),
            "p1".to_string(),
            "test".to_string(),
            Severity::Critical,
            Utc::now(),
        ));

        let document = snapshot.to_document().unwrap();
        assert!(document.contains("\"breachAlerts\""));
        assert!(document.contains("\"version\":1"));

        let parsed = Snapshot::from_document(&document).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_newer_version_rejected() {
        let err = Snapshot::from_document("{\"version\":99}").unwrap_err();
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(Snapshot::from_document("not json").is_err());
    }
}
