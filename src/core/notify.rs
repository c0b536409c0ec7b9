//! Sharing notifications.
//!
//! Delivery is best-effort: the sharing service logs a failed
//! notification and keeps the grant.

use tracing::info;

use crate::error::Result;

/// Tells a recipient that a credential was shared with them.
pub trait Notifier {
    fn notify(&self, recipient: &str, password_id: &str) -> Result<()>;
}

/// Notifier that only records the event in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, recipient: &str, password_id: &str) -> Result<()> {
        info!(recipient = %recipient, password_id = %password_id, "sharing notification sent");
        Ok(())
    }
}
