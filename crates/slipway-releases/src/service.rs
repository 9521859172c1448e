//! Release lifecycle operations

use std::sync::Arc;

use tracing::{error, info, instrument};
use uuid::Uuid;

use slipway_core::error::{ReleaseError, Result, StoreError};
use slipway_core::settings::Settings;
use slipway_core::types::{Release, User};
use slipway_git::GitRepo;

use crate::attachments::AttachmentStore;
use crate::notify::{HookQueue, Notifier};
use crate::store::ReleaseStore;

/// Orchestrates the create/update/delete transitions of a release.
///
/// The release record lives in the store, the tag lives in the git backend,
/// and the two are reconciled on every operation. There is no cross-resource
/// transaction: a tag created for a release whose insert then fails is left
/// behind and surfaces in operational cleanup, not rolled back.
pub struct ReleaseService {
    pub(crate) store: Arc<dyn ReleaseStore>,
    pub(crate) attachments: Arc<dyn AttachmentStore>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) hook_queue: Arc<dyn HookQueue>,
    pub(crate) settings: Settings,
}

impl ReleaseService {
    pub fn new(
        store: Arc<dyn ReleaseStore>,
        attachments: Arc<dyn AttachmentStore>,
        notifier: Arc<dyn Notifier>,
        hook_queue: Arc<dyn HookQueue>,
        settings: Settings,
    ) -> Self {
        Self {
            store,
            attachments,
            notifier,
            hook_queue,
            settings,
        }
    }

    /// Create a new release of a repository.
    ///
    /// The uniqueness pre-check and the insert are two separate store calls;
    /// the store's unique index is the backstop for concurrent creators, and
    /// its conflict error is reported the same way as the pre-check.
    #[instrument(skip(self, git, rel, attachment_uuids), fields(repo_id = rel.repo_id, tag = %rel.tag_name))]
    pub fn create_release(
        &self,
        git: &GitRepo,
        rel: &mut Release,
        attachment_uuids: &[Uuid],
    ) -> Result<()> {
        if self.store.is_release_exist(rel.repo_id, &rel.tag_name)? {
            return Err(ReleaseError::ReleaseAlreadyExists {
                tag_name: rel.tag_name.clone(),
            });
        }

        self.reconcile_tag(git, rel)?;

        rel.refresh_lower_tag_name();
        if let Err(e) = self.store.insert_release(rel) {
            return Err(match e {
                StoreError::AlreadyExists { tag_name } => {
                    ReleaseError::ReleaseAlreadyExists { tag_name }
                }
                other => other.into(),
            });
        }

        self.store.add_release_attachments(rel.id, attachment_uuids)?;

        if !rel.is_draft {
            self.notifier.new_release(rel);
        }

        info!(release_id = rel.id, "created release");
        Ok(())
    }

    /// Update a release, materializing its tag on a draft-to-published
    /// transition.
    #[instrument(skip(self, doer, git, rel, attachment_uuids), fields(release_id = rel.id, tag = %rel.tag_name))]
    pub fn update_release(
        &self,
        doer: &User,
        git: &GitRepo,
        rel: &mut Release,
        attachment_uuids: &[Uuid],
    ) -> Result<()> {
        self.reconcile_tag(git, rel)?;

        rel.refresh_lower_tag_name();
        self.store.update_release(rel)?;

        // Attachment linkage is best-effort on update, unlike on create
        if let Err(e) = self.store.add_release_attachments(rel.id, attachment_uuids) {
            error!(release_id = rel.id, error = %e, "linking attachments failed");
        }

        // The listener filters drafts, not us
        self.notifier.update_release(doer, rel);

        Ok(())
    }

    /// Delete a release by id.
    ///
    /// With `delete_tag` the record and the backend tag are both removed;
    /// without it the record is demoted to a bare tag and the tag is left
    /// untouched. Either way the attachment links go, and each stored
    /// payload is removed best-effort.
    #[instrument(skip(self, git, doer), fields(release_id = id, delete_tag))]
    pub fn delete_release_by_id(
        &self,
        git: &GitRepo,
        id: i64,
        doer: &User,
        delete_tag: bool,
    ) -> Result<()> {
        let mut rel = self.store.release_by_id(id)?;
        let repo = self.store.repository_by_id(rel.repo_id)?;

        if delete_tag {
            // A tag already removed externally counts as deleted
            git.delete_tag(&rel.tag_name)?;
            self.store.delete_release(id)?;
        } else {
            rel.is_tag = true;
            rel.is_draft = false;
            rel.is_prerelease = false;
            rel.title.clear();
            rel.note.clear();
            self.store.update_release(&rel)?;
        }

        rel.attachments = self
            .store
            .attachments_by_release(rel.id)
            .map_err(|e| ReleaseError::LoadAttributes(e.to_string()))?;

        self.store.delete_attachments_by_release(rel.id)?;

        for attachment in &rel.attachments {
            if let Err(e) = self.attachments.remove(attachment) {
                error!(
                    uuid = %attachment.uuid,
                    release_id = rel.id,
                    error = %e,
                    "deleting attachment payload failed"
                );
            }
        }

        self.notifier.delete_release(doer, &rel);

        info!(repo = %repo.full_name(), tag = %rel.tag_name, "deleted release");
        Ok(())
    }
}
