//! Strong-auth enrollment command.

use crate::cli::{context, output};
use crate::core::auth::Enrollment;
use crate::error::Result;

/// Attempt platform strong-auth enrollment.
pub fn execute() -> Result<()> {
    let manager = context::open()?;
    let profile = manager.enrollment_profile();
    output::dimmed(&format!(
        "enrolling {} for {}",
        profile.user, profile.relying_party
    ));

    match manager.strong_auth_enrollment()? {
        Enrollment::Enrolled { credential_id } => {
            output::success(&format!("enrolled credential {}", output::id(&credential_id)));
        }
        Enrollment::Unsupported => {
            output::warn("strong authentication is not available on this platform");
        }
        Enrollment::Rejected(reason) => {
            output::warn(&format!("enrollment rejected: {}", reason));
        }
    }
    Ok(())
}
