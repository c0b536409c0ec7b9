//! Error types.
//!
//! Every fallible operation returns [`Result`], whose error is one of the
//! domain enums below wrapped in [`Error`].

use thiserror::Error;

/// Top-level error for all strongroom operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the caller can fix this by changing its input.
    ///
    /// Validation and lookup failures never touch state; everything else
    /// comes from a collaborator and may succeed on retry.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::Record(_))
    }
}

/// Input rejected before any state was touched.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Lookup of a stored record failed.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl RecordError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        RecordError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Sealing or opening content failed.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("armor encoding failed: {0}")]
    ArmorFailed(String),

    #[error("invalid identity key: {0}")]
    InvalidIdentity(String),
}

/// Durable snapshot and key storage failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {0}: {1}")]
    ReadFailed(String, #[source] std::io::Error),

    #[error("failed to write {0}: {1}")]
    WriteFailed(String, #[source] std::io::Error),

    #[error("snapshot is not valid json: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("unable to determine home directory")]
    NoHome,
}

/// Configuration file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failures reported by an external collaborator.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("breach oracle failed: {0}")]
    Oracle(String),

    #[error("notification failed: {0}")]
    Notify(String),

    #[error("platform authenticator error: {0}")]
    Authenticator(String),

    #[error("credential source failed: {0}")]
    Credentials(String),
}

pub type Result<T> = std::result::Result<T, Error>;
