//! In-process snapshot storage.

use std::cell::RefCell;
use std::collections::HashMap;

use super::SnapshotStore;
use crate::error::Result;

/// Snapshot store that keeps documents in memory.
///
/// Useful when embedding the manager in a host that persists elsewhere,
/// and in tests.
#[derive(Debug, Default)]
pub struct Memory {
    documents: RefCell<HashMap<String, String>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current document under `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.documents.borrow().get(key).cloned()
    }
}

impl SnapshotStore for Memory {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, document: &str) -> Result<()> {
        self.documents
            .borrow_mut()
            .insert(key.to_string(), document.to_string());
        Ok(())
    }
}
