//! Durable snapshot storage.
//!
//! A key-value persistence surface: each key holds one whole document,
//! replaced wholesale on every save.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `SnapshotStore` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::error::Result;

mod fs;
mod memory;

pub(crate) use fs::create_private;
pub use fs::Filesystem;
pub use memory::Memory;

/// Key-value document storage.
pub trait SnapshotStore {
    /// Read the document stored under `key`.
    ///
    /// # Returns
    ///
    /// `None` if nothing has been saved under `key` yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write does not complete. A failed write
    /// must leave the previous document intact.
    fn save(&self, key: &str, document: &str) -> Result<()>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, document: &str) -> Result<()> {
        (**self).save(key, document)
    }
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for std::rc::Rc<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, document: &str) -> Result<()> {
        (**self).save(key, document)
    }
}
