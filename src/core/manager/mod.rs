//! The primary interface for vault security operations.
//!
//! [`SecurityManager`] owns the five persisted collections (notes, history,
//! alerts, grants, contacts) and the collaborators it needs to mutate them.
//! Construct one at application start and pass it to call sites.
//!
//! Every mutation is staged on a copy of the state, persisted, and only
//! then committed in memory, so a failed write never leaves memory ahead of
//! the durable snapshot.

mod breach;
mod emergency;
mod enrollment;
mod history;
mod notes;
mod report;
mod sharing;

use tracing::{debug, info};

use crate::core::analysis::{CredentialAnalyzer, StrengthAnalyzer};
use crate::core::auth::{Authenticator, Unavailable};
use crate::core::breach::{BreachOracle, KnownBreaches};
use crate::core::cipher::ContentCipher;
use crate::core::clock::{Clock, SystemClock};
use crate::core::constants;
use crate::core::notify::{LogNotifier, Notifier};
use crate::core::snapshot::Snapshot;
use crate::core::store::SnapshotStore;
use crate::error::Result;

/// Who strong-auth enrollment is performed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentProfile {
    pub relying_party: String,
    pub user: String,
}

impl Default for EnrollmentProfile {
    fn default() -> Self {
        Self {
            relying_party: constants::RELYING_PARTY.to_string(),
            user: whoami::username(),
        }
    }
}

/// Owns the vault security state and orchestrates every operation on it.
pub struct SecurityManager {
    state: Snapshot,
    store: Box<dyn SnapshotStore>,
    cipher: Box<dyn ContentCipher>,
    oracle: Box<dyn BreachOracle>,
    notifier: Box<dyn Notifier>,
    authenticator: Box<dyn Authenticator>,
    analyzer: Box<dyn CredentialAnalyzer>,
    clock: Box<dyn Clock>,
    profile: EnrollmentProfile,
}

impl std::fmt::Debug for SecurityManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityManager")
            .field("cipher", &self.cipher.name())
            .field("notes", &self.state.secure_notes.len())
            .field("history", &self.state.password_history.len())
            .field("alerts", &self.state.breach_alerts.len())
            .field("grants", &self.state.shared_passwords.len())
            .field("contacts", &self.state.emergency_contacts.len())
            .field("profile", &self.profile)
            .finish()
    }
}

/// Assembles a [`SecurityManager`].
///
/// Collaborators not supplied fall back to the local defaults: the
/// built-in breach list, a logging notifier, no platform authenticator,
/// the strength analyzer and the system clock.
pub struct ManagerBuilder {
    store: Box<dyn SnapshotStore>,
    cipher: Box<dyn ContentCipher>,
    oracle: Option<Box<dyn BreachOracle>>,
    notifier: Option<Box<dyn Notifier>>,
    authenticator: Option<Box<dyn Authenticator>>,
    analyzer: Option<Box<dyn CredentialAnalyzer>>,
    clock: Option<Box<dyn Clock>>,
    profile: Option<EnrollmentProfile>,
}

impl ManagerBuilder {
    pub fn oracle(mut self, oracle: impl BreachOracle + 'static) -> Self {
        self.oracle = Some(Box::new(oracle));
        self
    }

    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Some(Box::new(authenticator));
        self
    }

    pub fn analyzer(mut self, analyzer: impl CredentialAnalyzer + 'static) -> Self {
        self.analyzer = Some(Box::new(analyzer));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn profile(mut self, profile: EnrollmentProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Load the last durable snapshot (if any) and build the manager.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the snapshot cannot be read or parsed.
    pub fn open(self) -> Result<SecurityManager> {
        let state = match self.store.load(constants::SNAPSHOT_KEY)? {
            Some(document) => Snapshot::from_document(&document)?,
            None => Snapshot::default(),
        };

        info!(
            notes = state.secure_notes.len(),
            alerts = state.breach_alerts.len(),
            grants = state.shared_passwords.len(),
            "security manager opened"
        );

        Ok(SecurityManager {
            state,
            store: self.store,
            cipher: self.cipher,
            oracle: self
                .oracle
                .unwrap_or_else(|| Box::new(KnownBreaches::default())),
            notifier: self.notifier.unwrap_or_else(|| Box::new(LogNotifier)),
            authenticator: self.authenticator.unwrap_or_else(|| Box::new(Unavailable)),
            analyzer: self
                .analyzer
                .unwrap_or_else(|| Box::new(StrengthAnalyzer::default())),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            profile: self.profile.unwrap_or_default(),
        })
    }
}

impl SecurityManager {
    /// Start building a manager around a content cipher and snapshot store.
    pub fn builder(
        cipher: impl ContentCipher + 'static,
        store: impl SnapshotStore + 'static,
    ) -> ManagerBuilder {
        ManagerBuilder {
            store: Box::new(store),
            cipher: Box::new(cipher),
            oracle: None,
            notifier: None,
            authenticator: None,
            analyzer: None,
            clock: None,
            profile: None,
        }
    }

    /// Write the current state to the snapshot store.
    ///
    /// Mutating operations already do this; call it to re-save after
    /// loading an older snapshot format.
    pub fn save_snapshot(&self) -> Result<()> {
        self.persist(&self.state)
    }

    /// Read-only view of the whole persisted state.
    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    fn persist(&self, state: &Snapshot) -> Result<()> {
        let document = state.to_document()?;
        self.store.save(constants::SNAPSHOT_KEY, &document)?;
        debug!(bytes = document.len(), "snapshot saved");
        Ok(())
    }

    /// Stage `mutate` on a copy of the state, persist it, then commit.
    ///
    /// If `mutate` or the write fails, the in-memory state is untouched.
    fn commit<T>(&mut self, mutate: impl FnOnce(&mut Snapshot) -> Result<T>) -> Result<T> {
        let mut staged = self.state.clone();
        let value = mutate(&mut staged)?;
        self.persist(&staged)?;
        self.state = staged;
        Ok(value)
    }
}
