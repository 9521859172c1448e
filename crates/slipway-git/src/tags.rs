//! Tag operations

use git2::Oid;
use tracing::{info, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::{commit_to_info, CommitInfo};
use slipway_core::error::GitError;

impl GitRepo {
    /// Check whether a tag with the given name exists
    pub fn tag_exists(&self, name: &str) -> bool {
        self.repo
            .find_reference(&tag_ref(name))
            .is_ok()
    }

    /// Create a lightweight tag pointing at an explicit commit
    #[instrument(skip(self), fields(name, commit_sha))]
    pub fn create_tag(&self, name: &str, commit_sha: &str) -> Result<()> {
        if !git2::Reference::is_valid_name(&tag_ref(name)) {
            return Err(GitError::InvalidTagName {
                tag_name: name.to_string(),
            });
        }

        let oid = Oid::from_str(commit_sha)?;
        let commit = self.repo.find_commit(oid)?;
        self.repo
            .tag_lightweight(name, commit.as_object(), false)?;

        info!(name, commit_sha, "created tag");
        Ok(())
    }

    /// Delete a tag. A tag that does not exist is treated as already deleted.
    #[instrument(skip(self), fields(name))]
    pub fn delete_tag(&self, name: &str) -> Result<()> {
        if !self.tag_exists(name) {
            return Ok(());
        }

        self.repo.tag_delete(name)?;
        info!(name, "deleted tag");
        Ok(())
    }

    /// Get the SHA of the commit a tag points to
    pub fn tag_commit_id(&self, name: &str) -> Result<String> {
        Ok(self.tag_commit(name)?.sha)
    }

    /// Get the commit a tag points to
    pub fn tag_commit(&self, name: &str) -> Result<CommitInfo> {
        match self.repo.find_reference(&tag_ref(name)) {
            Ok(reference) => {
                let commit = reference.peel_to_commit()?;
                Ok(commit_to_info(&commit))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                Err(GitError::TagNotFound(name.to_string()))
            }
            Err(e) => Err(GitError::Git2(e)),
        }
    }
}

fn tag_ref(name: &str) -> String {
    format!("refs/tags/{}", name)
}
