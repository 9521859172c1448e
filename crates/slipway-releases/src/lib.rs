//! Slipway Releases - release lifecycle orchestration
//!
//! This crate implements the create/update/delete transitions of a release
//! backed by a git tag: tag reconciliation, record persistence, attachment
//! linkage and cleanup, and post-commit notification dispatch.

pub mod attachments;
pub mod memory;
pub mod notify;
mod reconcile;
pub mod service;
pub mod store;

pub use attachments::{AttachmentStore, FsAttachmentStore};
pub use memory::MemoryStore;
pub use notify::{HookQueue, LogHookQueue, LogNotifier, Notifier};
pub use service::ReleaseService;
pub use store::{ReleaseStore, StoreResult};
