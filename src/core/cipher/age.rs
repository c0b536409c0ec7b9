//! Age encryption backend.
//!
//! Seals content to the vault's own x25519 identity using the age format
//! with ASCII armor encoding.

use std::io::{Read, Write};

use ::age::x25519;
use tracing::trace;
use zeroize::Zeroizing;

use super::ContentCipher;
use crate::core::types::SealedValue;
use crate::error::{CipherError, Result};

/// Age-based content cipher bound to a single identity.
pub struct AgeContent {
    identity: x25519::Identity,
    recipient: x25519::Recipient,
}

impl AgeContent {
    /// Seal to and open with `identity`.
    pub fn new(identity: x25519::Identity) -> Self {
        let recipient = identity.to_public();
        Self {
            identity,
            recipient,
        }
    }

    /// Cipher with a freshly generated, unsaved identity.
    pub fn ephemeral() -> Self {
        Self::new(x25519::Identity::generate())
    }

    /// Public half of the identity (starts with "age1...").
    pub fn public_key(&self) -> String {
        self.recipient.to_string()
    }
}

impl std::fmt::Debug for AgeContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgeContent")
            .field("recipient", &self.public_key())
            .finish()
    }
}

impl ContentCipher for AgeContent {
    fn name(&self) -> &'static str {
        "age"
    }

    fn seal(&self, plaintext: &[u8]) -> Result<SealedValue> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let encryptor = age::Encryptor::with_recipients(std::iter::once(
            &self.recipient as &dyn age::Recipient,
        ))
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(age::armor::ArmoredWriter::wrap_output(
                &mut encrypted,
                age::armor::Format::AsciiArmor,
            )?)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        writer.write_all(plaintext)?;
        let armored = writer
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        armored
            .finish()
            .map_err(|e| CipherError::ArmorFailed(format!("{}", e)))?;

        trace!(ciphertext_len = encrypted.len(), "sealed");

        String::from_utf8(encrypted)
            .map_err(|e| CipherError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
    }

    fn open(&self, sealed: &str) -> Result<Zeroizing<Vec<u8>>> {
        trace!(ciphertext_len = sealed.len(), "opening");

        let reader = age::armor::ArmoredReader::new(sealed.as_bytes());
        let decryptor = age::Decryptor::new(reader)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let mut decrypted = Zeroizing::new(Vec::new());
        let mut reader = decryptor
            .decrypt(std::iter::once(&self.identity as &dyn age::Identity))
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        trace!(plaintext_len = decrypted.len(), "opened");

        Ok(decrypted)
    }
}
