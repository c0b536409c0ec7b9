//! Strongroom - security layer for a local credential vault.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── notes         # Secure note commands
//! │   ├── history       # Password history
//! │   ├── breach        # Breach scan and alerts
//! │   ├── share         # Sharing grants
//! │   ├── emergency     # Emergency contacts
//! │   ├── report        # Security report
//! │   ├── enroll        # Strong-auth enrollment
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── manager/      # SecurityManager and its operations
//!     ├── domain/       # Persisted record types
//!     ├── cipher/       # Content encryption (age)
//!     ├── store/        # Snapshot storage
//!     │   ├── fs        # Filesystem storage implementation
//!     │   └── memory    # In-memory storage
//!     ├── snapshot      # Versioned snapshot document
//!     ├── breach        # Breach oracle
//!     ├── analysis      # Password strength analysis
//!     ├── auth          # Platform authenticator
//!     ├── notify        # Sharing notifications
//!     └── config        # config.toml management
//! ```
//!
//! # Example
//!
//! ```no_run
//! use strongroom::core::cipher::AgeContent;
//! use strongroom::core::domain::NewNote;
//! use strongroom::core::store::Filesystem;
//! use strongroom::SecurityManager;
//!
//! # fn main() -> strongroom::error::Result<()> {
//! let mut manager =
//!     SecurityManager::builder(AgeContent::ephemeral(), Filesystem::new("/tmp/vault")).open()?;
//! manager.add_secure_note(NewNote::new("Wifi", "hunter2").encrypted(true))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::manager::{EnrollmentProfile, ManagerBuilder, SecurityManager};
