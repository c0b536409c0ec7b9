//! Vault identity key.
//!
//! The age identity used by the content cipher lives in the vault home as
//! `identity.key`, readable only by the owner.

use std::fs;
use std::io::Write;
use std::path::Path;

use age::x25519;
use tracing::{debug, warn};

use crate::core::constants;
use crate::core::store::create_private;
use crate::error::{CipherError, Result, StoreError};

/// Load the identity from `home`, generating and saving one if absent.
///
/// # Errors
///
/// Returns `StoreError` if the key file cannot be read or written, or
/// `CipherError::InvalidIdentity` if it is malformed.
pub fn load_or_generate(home: &Path) -> Result<x25519::Identity> {
    let key_path = home.join(constants::IDENTITY_FILE);
    if key_path.exists() {
        load(&key_path)
    } else {
        generate(&key_path)
    }
}

fn load(key_path: &Path) -> Result<x25519::Identity> {
    debug!(path = %key_path.display(), "loading identity");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = fs::metadata(key_path) {
            let mode = metadata.permissions().mode() & 0o777;
            if mode != 0o600 {
                warn!(
                    path = %key_path.display(),
                    mode = %format!("{:o}", mode),
                    "insecure key file permissions"
                );
            }
        }
    }

    let contents = fs::read_to_string(key_path)
        .map_err(|e| StoreError::ReadFailed(key_path.display().to_string(), e))?;

    contents
        .trim()
        .parse()
        .map_err(|e: &str| CipherError::InvalidIdentity(e.to_string()).into())
}

fn generate(key_path: &Path) -> Result<x25519::Identity> {
    debug!(path = %key_path.display(), "generating new identity");

    let identity = x25519::Identity::generate();
    let write_err = |e: std::io::Error| StoreError::WriteFailed(key_path.display().to_string(), e);

    if let Some(dir) = key_path.parent() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }

    // Display outputs AGE-SECRET-KEY-...
    use age::secrecy::ExposeSecret;
    let secret = identity.to_string();
    let mut file = create_private(key_path).map_err(write_err)?;
    writeln!(file, "{}", secret.expose_secret()).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;

    debug!(path = %key_path.display(), "identity saved");
    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_then_load_same_identity() {
        let tmp = TempDir::new().unwrap();

        let first = load_or_generate(tmp.path()).unwrap();
        let second = load_or_generate(tmp.path()).unwrap();

        assert_eq!(
            first.to_public().to_string(),
            second.to_public().to_string()
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_generated_key_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        load_or_generate(tmp.path()).unwrap();

        let mode = fs::metadata(tmp.path().join(constants::IDENTITY_FILE))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_key_private_in_world_writable_home() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let home = tmp.path().join("vault");
        fs::create_dir(&home).unwrap();
        fs::set_permissions(&home, fs::Permissions::from_mode(0o777)).unwrap();

        let identity = load_or_generate(&home).unwrap();

        let key_path = home.join(constants::IDENTITY_FILE);
        let mode = fs::metadata(&key_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
        let stored = fs::read_to_string(&key_path).unwrap();
        assert!(stored.starts_with("AGE-SECRET-KEY-"));
        assert_eq!(
            load_or_generate(&home).unwrap().to_public().to_string(),
            identity.to_public().to_string()
        );
    }

    #[test]
    fn test_malformed_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(constants::IDENTITY_FILE), "garbage\n").unwrap();

        assert!(load_or_generate(tmp.path()).is_err());
    }
}
