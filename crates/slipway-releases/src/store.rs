//! Persistence contract for release records

use uuid::Uuid;

use slipway_core::error::StoreError;
use slipway_core::types::{Attachment, Release, Repository};

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Persistence layer for release records and attachment links.
///
/// Implementations back the release lifecycle; they enforce the unique index
/// on (repository, lowercased tag name) and report a violation on insert as
/// [`StoreError::AlreadyExists`].
pub trait ReleaseStore: Send + Sync {
    /// Whether a release with the given tag name exists in the repository.
    /// The comparison is case-insensitive on the lowercased tag name.
    fn is_release_exist(&self, repo_id: i64, tag_name: &str) -> StoreResult<bool>;

    /// Insert a new release record, assigning its `id`
    fn insert_release(&self, rel: &mut Release) -> StoreResult<()>;

    /// Persist changed fields of an existing release
    fn update_release(&self, rel: &Release) -> StoreResult<()>;

    /// Hard-delete a release record
    fn delete_release(&self, id: i64) -> StoreResult<()>;

    /// Look up a release by id
    fn release_by_id(&self, id: i64) -> StoreResult<Release>;

    /// Look up a repository by id
    fn repository_by_id(&self, repo_id: i64) -> StoreResult<Repository>;

    /// Link uploaded attachments to a release by UUID.
    /// UUIDs with no matching attachment record are skipped.
    fn add_release_attachments(&self, release_id: i64, uuids: &[Uuid]) -> StoreResult<()>;

    /// Attachment records currently linked to a release
    fn attachments_by_release(&self, release_id: i64) -> StoreResult<Vec<Attachment>>;

    /// Remove all attachment link records for a release.
    /// The stored payloads are untouched; physical removal is the
    /// attachment store's job.
    fn delete_attachments_by_release(&self, release_id: i64) -> StoreResult<()>;
}
