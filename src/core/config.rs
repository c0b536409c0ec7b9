//! Configuration file management.
//!
//! Handles reading, writing, and validating `config.toml` in the vault home.
//! Every field has a default, so a missing file means default settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result, StoreError};

/// Vault settings stored in `<home>/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub breach: BreachConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Breach oracle settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachConfig {
    /// Extra breach list (plaintext passwords or SHA-256 digests, one per line).
    /// Relative paths resolve against the vault home.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<PathBuf>,
    /// Source name recorded on alerts.
    #[serde(default = "default_breach_source")]
    pub source: String,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            list: None,
            source: default_breach_source(),
        }
    }
}

fn default_breach_source() -> String {
    constants::DEFAULT_BREACH_SOURCE.to_string()
}

/// Security report settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Days after which an unchanged password counts as old.
    #[serde(default = "default_max_age_days")]
    pub max_age_days: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_age_days: default_max_age_days(),
        }
    }
}

fn default_max_age_days() -> u32 {
    constants::DEFAULT_MAX_AGE_DAYS
}

/// Strong-auth enrollment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_relying_party")]
    pub relying_party: String,
    /// User name presented to the platform authenticator.
    #[serde(default = "whoami::username")]
    pub user: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            relying_party: default_relying_party(),
            user: whoami::username(),
        }
    }
}

fn default_relying_party() -> String {
    constants::RELYING_PARTY.to_string()
}

impl Config {
    /// Path to the configuration file in `home`.
    pub fn path(home: &Path) -> PathBuf {
        home.join(constants::CONFIG_FILE)
    }

    /// Load configuration from `home`, falling back to defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load(home: &Path) -> Result<Self> {
        let path = Self::path(home);
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `home`.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, home: &Path) -> Result<()> {
        debug!("saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::create_dir_all(home)?;
        std::fs::write(Self::path(home), contents)?;

        Ok(())
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.report.max_age_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report.max_age_days",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        if self.breach.source.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "breach.source",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if self.auth.relying_party.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "auth.relying_party",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Breach list path resolved against `home`.
    pub fn breach_list(&self, home: &Path) -> Option<PathBuf> {
        self.breach.list.as_ref().map(|list| {
            if list.is_absolute() {
                list.clone()
            } else {
                home.join(list)
            }
        })
    }
}

/// Resolve the vault home: `$STRONGROOM_HOME`, else `~/.strongroom`.
///
/// # Errors
///
/// Returns `StoreError::NoHome` if neither is available.
pub fn home_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(constants::HOME_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = dirs::home_dir().ok_or(StoreError::NoHome)?;
    Ok(home.join(constants::HOME_DIR))
}
