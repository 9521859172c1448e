//! Slipway Core - Shared types for release hosting
//!
//! This crate provides the data model, error taxonomy, webhook payload types,
//! and settings layer shared by the Slipway release handling crates.

pub mod error;
pub mod payload;
pub mod settings;
pub mod types;

pub use error::{GitError, ReleaseError, Result, SettingsError, StoreError};
pub use payload::{CreatePayload, PayloadCommit, PayloadRepo, PayloadUser, PushPayload};
pub use payload::{EMPTY_SHA, TAG_PREFIX};
pub use settings::Settings;
pub use types::{Attachment, Release, Repository, User};
