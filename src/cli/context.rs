//! Opens the security manager for CLI commands.
//!
//! Everything lives under the vault home (`$STRONGROOM_HOME` or
//! `~/.strongroom`): `config.toml`, `identity.key` and the snapshot.

use tracing::debug;

use crate::core::analysis::StrengthAnalyzer;
use crate::core::auth::Unavailable;
use crate::core::breach::KnownBreaches;
use crate::core::cipher::AgeContent;
use crate::core::config::{self, Config};
use crate::core::identity;
use crate::core::notify::LogNotifier;
use crate::core::store::Filesystem;
use crate::error::Result;
use crate::{EnrollmentProfile, SecurityManager};

/// Open the manager for the current vault home.
///
/// # Errors
///
/// Returns error if the config, identity, breach list or snapshot cannot
/// be loaded.
pub fn open() -> Result<SecurityManager> {
    let home = config::home_dir()?;
    let config = Config::load(&home)?;
    debug!(home = %home.display(), "opening vault");

    let identity = identity::load_or_generate(&home)?;

    let mut oracle = KnownBreaches::new().with_source(config.breach.source.clone());
    if let Some(list) = config.breach_list(&home) {
        let added = oracle.extend_from_file(&list)?;
        debug!(path = %list.display(), added, "breach list loaded");
    }

    SecurityManager::builder(AgeContent::new(identity), Filesystem::new(&home))
        .oracle(oracle)
        .notifier(LogNotifier)
        .authenticator(Unavailable)
        .analyzer(StrengthAnalyzer::new(config.report.max_age_days))
        .profile(EnrollmentProfile {
            relying_party: config.auth.relying_party,
            user: config.auth.user,
        })
        .open()
}
