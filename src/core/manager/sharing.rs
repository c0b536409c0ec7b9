//! Credential sharing.
//!
//! Grants are appended and never removed. The recipient is notified after
//! the grant is durable; a failed notification is logged and the grant
//! stands.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::SecurityManager;
use crate::core::domain::{Permission, SharedPasswordGrant};
use crate::core::types::new_id;
use crate::core::validation;
use crate::error::Result;

impl SecurityManager {
    /// Grant `recipient` access to a credential.
    ///
    /// `expires_at` is stored as given, even if it is already in the past.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `password_id` or `recipient` is blank,
    /// or `StoreError` if the grant cannot be persisted. Notification
    /// failures are not errors.
    pub fn share_password(
        &mut self,
        password_id: &str,
        recipient: &str,
        permissions: Permission,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<SharedPasswordGrant> {
        validation::require("password id", password_id)?;
        validation::require("recipient", recipient)?;

        let grant = SharedPasswordGrant::new(
            new_id(),
            password_id.to_string(),
            recipient.to_string(),
            permissions,
            expires_at,
            self.clock.now(),
        );

        let shared = grant.clone();
        self.commit(move |state| {
            state.shared_passwords.push(grant);
            Ok(())
        })?;

        debug!(
            id = %shared.id(),
            password_id = %password_id,
            permissions = %permissions,
            "password shared"
        );

        if let Err(e) = self.notifier.notify(recipient, password_id) {
            warn!(
                recipient = %recipient,
                password_id = %password_id,
                error = %e,
                "failed to notify share recipient"
            );
        }

        Ok(shared)
    }

    /// Every grant ever issued, in creation order.
    pub fn shared_passwords(&self) -> &[SharedPasswordGrant] {
        &self.state.shared_passwords
    }

    /// Grants that still authorize access now.
    pub fn active_grants(&self) -> Vec<&SharedPasswordGrant> {
        let now = self.clock.now();
        self.state
            .shared_passwords
            .iter()
            .filter(|g| g.is_active(now))
            .collect()
    }

    pub fn grants_for(&self, password_id: &str) -> Vec<&SharedPasswordGrant> {
        self.state
            .shared_passwords
            .iter()
            .filter(|g| g.password_id() == password_id)
            .collect()
    }
}
