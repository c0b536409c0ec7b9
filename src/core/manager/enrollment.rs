//! Strong-auth enrollment.

use tracing::{info, warn};

use super::{EnrollmentProfile, SecurityManager};
use crate::core::auth::{Enrollment, EnrollmentRequest};
use crate::error::Result;

impl SecurityManager {
    /// Ask the platform authenticator to enroll a public-key credential
    /// for the configured user.
    ///
    /// # Errors
    ///
    /// Only unexpected authenticator failures. Unsupported platforms and
    /// declined prompts are reported through [`Enrollment`].
    pub fn strong_auth_enrollment(&self) -> Result<Enrollment> {
        let request = EnrollmentRequest::new(&self.profile.relying_party, &self.profile.user);

        let outcome = self.authenticator.create_credential(&request)?;
        match &outcome {
            Enrollment::Enrolled { credential_id } => {
                info!(credential_id = %credential_id, "strong authentication enrolled");
            }
            Enrollment::Unsupported => {
                info!("platform authenticator not available");
            }
            Enrollment::Rejected(reason) => {
                warn!(reason = %reason, "strong authentication enrollment rejected");
            }
        }
        Ok(outcome)
    }

    /// Whether enrollment succeeded.
    pub fn enroll_strong_auth(&self) -> Result<bool> {
        Ok(self.strong_auth_enrollment()?.is_enrolled())
    }

    pub fn enrollment_profile(&self) -> &EnrollmentProfile {
        &self.profile
    }
}
