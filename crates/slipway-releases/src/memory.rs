//! In-memory release store

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use slipway_core::error::StoreError;
use slipway_core::types::{Attachment, Release, Repository};

use crate::store::{ReleaseStore, StoreResult};

/// Mutex-guarded in-memory implementation of [`ReleaseStore`].
///
/// Used for embedding and tests. Enforces the unique index on
/// (repository, lowercased tag name) at insert time.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_release_id: i64,
    releases: HashMap<i64, Release>,
    repositories: HashMap<i64, Repository>,
    attachments: HashMap<Uuid, Attachment>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a repository record
    pub fn add_repository(&self, repo: Repository) -> StoreResult<()> {
        self.lock()?.repositories.insert(repo.id, repo);
        Ok(())
    }

    /// Register an uploaded attachment, not yet linked to any release
    pub fn add_attachment(&self, attachment: Attachment) -> StoreResult<()> {
        self.lock()?.attachments.insert(attachment.uuid, attachment);
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))
    }
}

impl ReleaseStore for MemoryStore {
    fn is_release_exist(&self, repo_id: i64, tag_name: &str) -> StoreResult<bool> {
        let lower = tag_name.to_ascii_lowercase();
        let inner = self.lock()?;
        Ok(inner
            .releases
            .values()
            .any(|r| r.repo_id == repo_id && r.lower_tag_name == lower))
    }

    fn insert_release(&self, rel: &mut Release) -> StoreResult<()> {
        let mut inner = self.lock()?;

        // Unique-index backstop on (repo_id, lower_tag_name)
        if inner
            .releases
            .values()
            .any(|r| r.repo_id == rel.repo_id && r.lower_tag_name == rel.lower_tag_name)
        {
            return Err(StoreError::AlreadyExists {
                tag_name: rel.tag_name.clone(),
            });
        }

        inner.next_release_id += 1;
        rel.id = inner.next_release_id;
        inner.releases.insert(rel.id, rel.clone());
        Ok(())
    }

    fn update_release(&self, rel: &Release) -> StoreResult<()> {
        let mut inner = self.lock()?;
        if !inner.releases.contains_key(&rel.id) {
            return Err(StoreError::ReleaseNotFound(rel.id));
        }
        inner.releases.insert(rel.id, rel.clone());
        Ok(())
    }

    fn delete_release(&self, id: i64) -> StoreResult<()> {
        self.lock()?
            .releases
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::ReleaseNotFound(id))
    }

    fn release_by_id(&self, id: i64) -> StoreResult<Release> {
        self.lock()?
            .releases
            .get(&id)
            .cloned()
            .ok_or(StoreError::ReleaseNotFound(id))
    }

    fn repository_by_id(&self, repo_id: i64) -> StoreResult<Repository> {
        self.lock()?
            .repositories
            .get(&repo_id)
            .cloned()
            .ok_or(StoreError::RepositoryNotFound(repo_id))
    }

    fn add_release_attachments(&self, release_id: i64, uuids: &[Uuid]) -> StoreResult<()> {
        let mut inner = self.lock()?;
        for uuid in uuids {
            if let Some(att) = inner.attachments.get_mut(uuid) {
                att.release_id = release_id;
            }
        }
        Ok(())
    }

    fn attachments_by_release(&self, release_id: i64) -> StoreResult<Vec<Attachment>> {
        let inner = self.lock()?;
        Ok(inner
            .attachments
            .values()
            .filter(|a| a.release_id == release_id)
            .cloned()
            .collect())
    }

    fn delete_attachments_by_release(&self, release_id: i64) -> StoreResult<()> {
        self.lock()?
            .attachments
            .retain(|_, a| a.release_id != release_id);
        Ok(())
    }
}
