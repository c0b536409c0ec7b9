//! Test support utilities for strongroom integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated vault home.
///
/// Child processes get `STRONGROOM_HOME` pointed at the temp dir, so tests
/// can safely run in parallel.
pub struct Test {
    /// Vault home directory
    pub home: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Write a credential export into the vault home and return its path.
    pub fn credentials(&self, json: &str) -> PathBuf {
        let path = self.home.path().join("credentials.json");
        std::fs::write(&path, json).expect("failed to write credentials");
        path
    }

    /// Path of the persisted snapshot.
    pub fn snapshot_path(&self) -> PathBuf {
        self.home.path().join("vault-security.json")
    }

    /// Parsed snapshot document.
    pub fn snapshot(&self) -> serde_json::Value {
        let contents =
            std::fs::read_to_string(self.snapshot_path()).expect("snapshot not written");
        serde_json::from_str(&contents).expect("snapshot is not JSON")
    }
}
