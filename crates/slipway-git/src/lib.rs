//! Slipway Git - Git backend operations for release hosting
//!
//! This crate wraps git2 with the repository, tag, and commit operations the
//! release lifecycle needs: tag existence and creation, commit resolution,
//! and ancestor counting.

mod commits;
mod repository;
mod tags;
pub mod types;

#[cfg(test)]
mod testutil;

pub use repository::{GitRepo, Result};
pub use types::CommitInfo;
