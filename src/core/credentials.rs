//! Access to the primary credential collection.
//!
//! The collection is owned elsewhere; this subsystem only reads it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::domain::Credential;
use crate::error::{CollaboratorError, Result};

/// Read-only source of primary credentials.
pub trait CredentialSource {
    /// Current credentials.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::Credentials` if the collection is unavailable.
    fn credentials(&self) -> Result<Vec<Credential>>;
}

impl CredentialSource for [Credential] {
    fn credentials(&self) -> Result<Vec<Credential>> {
        Ok(self.to_vec())
    }
}

impl CredentialSource for Vec<Credential> {
    fn credentials(&self) -> Result<Vec<Credential>> {
        Ok(self.clone())
    }
}

/// Credentials exported as a JSON array of
/// `{"id", "password", "category", "lastChanged"}` objects.
#[derive(Debug, Clone)]
pub struct JsonCredentials {
    path: PathBuf,
}

impl JsonCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialSource for JsonCredentials {
    fn credentials(&self) -> Result<Vec<Credential>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            CollaboratorError::Credentials(format!("{}: {}", self.path.display(), e))
        })?;
        let credentials: Vec<Credential> = serde_json::from_str(&contents).map_err(|e| {
            CollaboratorError::Credentials(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), count = credentials.len(), "credentials loaded");
        Ok(credentials)
    }
}
