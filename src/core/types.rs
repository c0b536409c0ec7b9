//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// Opaque identifier of a record this subsystem owns (UUID v4 string).
pub type RecordId = String;

/// Identifier of a credential in the primary collection.
///
/// Owned by the external credential store; never generated here.
pub type PasswordId = String;

/// Sealed payload produced by the content cipher (age-armored ciphertext).
pub type SealedValue = String;

/// Recipient of a shared credential, usually an email address.
pub type RecipientAddress = String;

/// Generate a fresh record identifier.
pub fn new_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
