//! Filesystem snapshot storage.
//!
//! Stores each key as `<dir>/<key>.json` with owner-only permissions.
//! Writes go to a temporary file first and are renamed into place, so a
//! crash mid-write never truncates the previous snapshot.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::SnapshotStore;
use crate::error::{Result, StoreError};

/// Filesystem-backed snapshot store rooted at a directory.
#[derive(Debug, Clone)]
pub struct Filesystem {
    dir: PathBuf,
}

impl Filesystem {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the documents.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)
                .map_err(|e| StoreError::WriteFailed(self.dir.display().to_string(), e))?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700))
                    .map_err(|e| StoreError::WriteFailed(self.dir.display().to_string(), e))?;
            }
        }
        Ok(())
    }
}

impl SnapshotStore for Filesystem {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            debug!(path = %path.display(), "no snapshot yet");
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| StoreError::ReadFailed(path.display().to_string(), e))?;
        debug!(path = %path.display(), bytes = contents.len(), "snapshot read");
        Ok(Some(contents))
    }

    fn save(&self, key: &str, document: &str) -> Result<()> {
        self.ensure_dir()?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let write_err = |e: std::io::Error| StoreError::WriteFailed(path.display().to_string(), e);

        {
            let mut file = create_private(&tmp).map_err(write_err)?;
            file.write_all(document.as_bytes()).map_err(write_err)?;
            file.sync_all().map_err(write_err)?;
        }

        fs::rename(&tmp, &path).map_err(write_err)?;
        debug!(path = %path.display(), bytes = document.len(), "snapshot written");

        Ok(())
    }
}

/// Create `path` as a new file that is owner-only from the moment it exists.
///
/// A stale file at `path` is removed first, so its permissions never carry
/// over and a planted symlink is never followed.
pub(crate) fn create_private(path: &Path) -> io::Result<fs::File> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path)
}
