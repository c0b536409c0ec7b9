//! Breach oracle.
//!
//! Decides whether a password appears in a known breach dataset. The
//! built-in [`KnownBreaches`] oracle keeps SHA-256 digests of lowercased
//! breached passwords, so plaintext breach lists never need to stay in
//! memory once loaded.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::core::constants::{COMMON_BREACHED_PASSWORDS, DEFAULT_BREACH_SOURCE};
use crate::error::{Result, StoreError, ValidationError};

/// External check for compromised passwords.
pub trait BreachOracle {
    /// Whether `password` appears in a breach dataset.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::Oracle` (or any other error) when the
    /// dataset cannot be consulted. The scan that called it is abandoned.
    fn is_breached(&self, password: &str) -> Result<bool>;

    /// Name recorded as `breachSource` on alerts this oracle raises.
    fn source(&self) -> &str {
        DEFAULT_BREACH_SOURCE
    }
}

/// Local breach dataset of password digests.
#[derive(Debug, Clone)]
pub struct KnownBreaches {
    digests: HashSet<String>,
    source: String,
}

impl Default for KnownBreaches {
    fn default() -> Self {
        let mut oracle = Self::empty();
        for password in COMMON_BREACHED_PASSWORDS {
            oracle.insert_password(password);
        }
        oracle
    }
}

impl KnownBreaches {
    /// Oracle seeded with the common breached passwords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle that knows no breaches.
    pub fn empty() -> Self {
        Self {
            digests: HashSet::new(),
            source: DEFAULT_BREACH_SOURCE.to_string(),
        }
    }

    /// Override the source name recorded on alerts.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// Add a breached password. Matching is case-insensitive.
    pub fn insert_password(&mut self, password: &str) {
        self.digests.insert(digest(password));
    }

    /// Add the hex SHA-256 digest of a lowercased breached password.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `hex` is not 64 hex digits.
    pub fn insert_digest(&mut self, hex: &str) -> Result<()> {
        if !is_digest(hex) {
            return Err(ValidationError::Invalid {
                field: "breach digest",
                reason: format!("expected 64 hex digits, got '{}'", hex),
            }
            .into());
        }
        self.digests.insert(hex.to_ascii_lowercase());
        Ok(())
    }

    /// Load extra entries from a breach list file.
    ///
    /// One entry per line: a 64-hex-digit SHA-256 digest, or a plaintext
    /// password. Blank lines and lines starting with `#` are skipped.
    ///
    /// # Returns
    ///
    /// Number of entries read.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let contents = fs::read_to_string(path)
            .map_err(|e| StoreError::ReadFailed(path.display().to_string(), e))?;

        let mut count = 0;
        for line in contents.lines() {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if is_digest(entry) {
                self.insert_digest(entry)?;
            } else {
                self.insert_password(entry);
            }
            count += 1;
        }

        debug!(path = %path.display(), entries = count, "breach list loaded");
        Ok(count)
    }
}

impl BreachOracle for KnownBreaches {
    fn is_breached(&self, password: &str) -> Result<bool> {
        Ok(self.digests.contains(&digest(password)))
    }

    fn source(&self) -> &str {
        &self.source
    }
}

fn digest(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.to_lowercase().as_bytes()))
}

fn is_digest(entry: &str) -> bool {
    entry.len() == 64 && entry.chars().all(|c| c.is_ascii_hexdigit())
}
