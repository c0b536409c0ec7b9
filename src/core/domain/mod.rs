//! Domain types.

mod alert;
mod contact;
mod credential;
mod grant;
mod history;
mod note;
mod report;

pub use alert::{BreachAlert, Severity};
pub use contact::{AccessLevel, EmergencyContact, NewContact};
pub use credential::{Credential, CredentialStats};
pub use grant::{Permission, SharedPasswordGrant};
pub use history::PasswordHistoryEntry;
pub use note::{NewAttachment, NewNote, NoteUpdate, SecureAttachment, SecureNote};
pub use report::SecurityReport;
