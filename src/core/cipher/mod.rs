//! Content encryption gateway.
//!
//! Sensitive payloads (encrypted note bodies, attachments, old passwords)
//! pass through a [`ContentCipher`] before they are stored.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ContentCipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use zeroize::Zeroizing;

use crate::core::types::SealedValue;
use crate::error::{CipherError, Result};

mod age;

pub use age::AgeContent;

/// Reversible transform applied to content before it is stored.
pub trait ContentCipher {
    /// Seal plaintext bytes.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn seal(&self, plaintext: &[u8]) -> Result<SealedValue>;

    /// Open a value previously produced by [`ContentCipher::seal`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the value is malformed or was sealed for a
    /// different key.
    fn open(&self, sealed: &str) -> Result<Zeroizing<Vec<u8>>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;

    /// Seal a UTF-8 string.
    fn seal_str(&self, plaintext: &str) -> Result<SealedValue> {
        self.seal(plaintext.as_bytes())
    }

    /// Open a sealed value that is known to hold UTF-8 text.
    fn open_string(&self, sealed: &str) -> Result<Zeroizing<String>> {
        let bytes = self.open(sealed)?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)))?;
        Ok(Zeroizing::new(text.to_string()))
    }
}
