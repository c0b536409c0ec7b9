//! Constants used throughout strongroom.
//!
//! Centralizes magic strings and limits.

/// Directory under HOME holding vault state (~/.strongroom).
pub const HOME_DIR: &str = ".strongroom";

/// Environment variable overriding the vault home directory.
pub const HOME_ENV: &str = "STRONGROOM_HOME";

/// Configuration file name inside the vault home.
pub const CONFIG_FILE: &str = "config.toml";

/// Identity key file name inside the vault home.
pub const IDENTITY_FILE: &str = "identity.key";

/// Fixed key the snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "vault-security";

/// Current snapshot document version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Maximum history entries kept per credential.
pub const HISTORY_LIMIT: usize = 10;

/// Breach source recorded by the built-in oracle.
pub const DEFAULT_BREACH_SOURCE: &str = "Data Breach Database";

/// Passwords every default oracle treats as breached.
pub const COMMON_BREACHED_PASSWORDS: &[&str] = &["password123", "123456", "admin", "qwerty"];

/// Default maximum password age before the report calls it old.
pub const DEFAULT_MAX_AGE_DAYS: u32 = 90;

/// Relying party name presented during strong-auth enrollment.
pub const RELYING_PARTY: &str = "NexusCipher";

/// COSE algorithm identifier for ES256.
pub const ES256: i32 = -7;
