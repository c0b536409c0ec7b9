//! Breach monitoring.

use tracing::{debug, info, warn};

use super::SecurityManager;
use crate::core::domain::{BreachAlert, Credential, Severity};
use crate::core::types::new_id;
use crate::error::{RecordError, Result};

impl SecurityManager {
    /// Scan credentials against the breach oracle.
    ///
    /// Every breached credential gets a new alert, even if an earlier scan
    /// already raised one for it.
    ///
    /// # Returns
    ///
    /// The alerts created by this scan.
    ///
    /// # Errors
    ///
    /// If the oracle fails the whole scan is abandoned and no alert from it
    /// is kept.
    pub fn check_for_breaches(&mut self, credentials: &[Credential]) -> Result<Vec<BreachAlert>> {
        let now = self.clock.now();
        let source = self.oracle.source().to_string();

        let mut found = Vec::new();
        for credential in credentials {
            if !self.oracle.is_breached(&credential.password)? {
                continue;
            }

            let severity = Severity::for_category(&credential.category);
            warn!(
                password_id = %credential.id,
                severity = %severity,
                "credential found in breach dataset"
            );
            found.push(BreachAlert::new(
                new_id(),
                credential.id.clone(),
                source.clone(),
                severity,
                now,
            ));
        }

        if found.is_empty() {
            debug!(scanned = credentials.len(), "no breached credentials");
            return Ok(found);
        }

        let created = found.clone();
        self.commit(move |state| {
            state.breach_alerts.extend(found);
            Ok(())
        })?;

        info!(
            scanned = credentials.len(),
            breached = created.len(),
            "breach scan complete"
        );
        Ok(created)
    }

    /// Mark an alert as handled.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown alert id.
    pub fn resolve_breach_alert(&mut self, id: &str) -> Result<BreachAlert> {
        let index = self
            .state
            .breach_alerts
            .iter()
            .position(|a| a.id() == id)
            .ok_or_else(|| RecordError::not_found("breach alert", id))?;

        if self.state.breach_alerts[index].is_resolved() {
            return Ok(self.state.breach_alerts[index].clone());
        }

        let resolved = self.commit(|state| {
            let alert = &mut state.breach_alerts[index];
            alert.resolve();
            Ok(alert.clone())
        })?;

        debug!(id = %id, "breach alert resolved");
        Ok(resolved)
    }

    /// All alerts in detection order.
    pub fn breach_alerts(&self) -> &[BreachAlert] {
        &self.state.breach_alerts
    }

    pub fn unresolved_alerts(&self) -> Vec<&BreachAlert> {
        self.state
            .breach_alerts
            .iter()
            .filter(|a| !a.is_resolved())
            .collect()
    }
}
