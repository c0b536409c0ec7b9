//! Emergency access contacts.

use tracing::debug;

use super::SecurityManager;
use crate::core::domain::{EmergencyContact, NewContact};
use crate::core::types::new_id;
use crate::core::validation;
use crate::error::{RecordError, Result};

impl SecurityManager {
    /// Register a trusted contact.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a blank name or a malformed email.
    pub fn setup_emergency_contact(&mut self, contact: NewContact) -> Result<EmergencyContact> {
        validation::require("name", &contact.name)?;
        validation::validate_email("email", &contact.email)?;

        let stored = EmergencyContact::new(new_id(), contact);

        let added = stored.clone();
        self.commit(move |state| {
            state.emergency_contacts.push(stored);
            Ok(())
        })?;

        debug!(id = %added.id(), access = %added.access_level(), "emergency contact added");
        Ok(added)
    }

    /// Remove a contact.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id.
    pub fn remove_emergency_contact(&mut self, id: &str) -> Result<EmergencyContact> {
        let index = self
            .state
            .emergency_contacts
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| RecordError::not_found("emergency contact", id))?;

        let removed = self.commit(|state| Ok(state.emergency_contacts.remove(index)))?;

        debug!(id = %id, "emergency contact removed");
        Ok(removed)
    }

    pub fn emergency_contacts(&self) -> &[EmergencyContact] {
        &self.state.emergency_contacts
    }
}
