//! Core library components.
//!
//! The [`manager`] owns the persisted security state; everything else is
//! the collaborators it is assembled from and the types it hands out.

pub mod analysis;
pub mod auth;
pub mod breach;
pub mod cipher;
pub mod clock;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod domain;
pub mod identity;
pub mod manager;
pub mod notify;
pub mod snapshot;
pub mod store;
pub mod types;
pub mod validation;
