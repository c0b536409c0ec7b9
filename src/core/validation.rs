//! Input validation for manager operations.
//!
//! All checks run before any state is staged.

use crate::error::{Result, ValidationError};

/// Reject blank (empty or whitespace-only) input.
///
/// # Arguments
///
/// * `field` - Field name used in the error message
/// * `value` - The caller-supplied value
///
/// # Errors
///
/// Returns `ValidationError::Empty` if the value is blank.
pub fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field }.into());
    }
    Ok(())
}

/// Validate a recipient or contact email address.
///
/// Only a shape check: one `@` with text on both sides.
pub fn validate_email(field: &'static str, value: &str) -> Result<()> {
    require(field, value)?;

    let mut parts = value.trim().splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::Invalid {
            field,
            reason: format!("'{}' is not an email address", value),
        }
        .into());
    }

    Ok(())
}
