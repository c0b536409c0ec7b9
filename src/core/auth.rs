//! Platform strong-authentication enrollment.
//!
//! Enrollment is a capability query: the platform either enrolled a
//! public-key credential, does not support it, or rejected the attempt.
//! Only unexpected host failures are errors.

use crate::core::constants::ES256;

/// Public-key credential creation options.
#[derive(Clone)]
pub struct EnrollmentRequest {
    pub relying_party: String,
    pub user_name: String,
    pub display_name: String,
    pub user_id: [u8; 16],
    pub challenge: [u8; 32],
    /// COSE algorithm identifier.
    pub algorithm: i32,
    /// Require a built-in (platform) authenticator.
    pub platform_attachment: bool,
    pub user_verification_required: bool,
}

impl EnrollmentRequest {
    /// ES256 request with a fresh random challenge and user handle.
    pub fn new(relying_party: impl Into<String>, user_name: impl Into<String>) -> Self {
        let user_name = user_name.into();
        Self {
            relying_party: relying_party.into(),
            display_name: user_name.clone(),
            user_name,
            user_id: rand::random(),
            challenge: rand::random(),
            algorithm: ES256,
            platform_attachment: true,
            user_verification_required: true,
        }
    }
}

impl std::fmt::Debug for EnrollmentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrollmentRequest")
            .field("relying_party", &self.relying_party)
            .field("user_name", &self.user_name)
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// Outcome of an enrollment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrollment {
    Enrolled { credential_id: String },
    /// The platform has no strong-auth capability.
    Unsupported,
    /// The platform or user declined.
    Rejected(String),
}

impl Enrollment {
    pub fn is_enrolled(&self) -> bool {
        matches!(self, Enrollment::Enrolled { .. })
    }
}

/// Host-provided public-key credential API.
pub trait Authenticator {
    /// Attempt to create a credential.
    ///
    /// # Errors
    ///
    /// Only for unexpected host failures. Missing capability is
    /// `Ok(Enrollment::Unsupported)`.
    fn create_credential(&self, request: &EnrollmentRequest) -> crate::error::Result<Enrollment>;
}

/// Authenticator for hosts without a strong-auth capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl Authenticator for Unavailable {
    fn create_credential(&self, _request: &EnrollmentRequest) -> crate::error::Result<Enrollment> {
        Ok(Enrollment::Unsupported)
    }
}
