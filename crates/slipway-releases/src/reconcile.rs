//! Tag reconciliation
//!
//! Keeps a release and its git tag consistent: materializes the tag when a
//! release is published and refreshes the fields derived from the tag commit
//! on every call. Tags may legitimately pre-exist (created by a direct push),
//! so tag creation is idempotent per tag name while the derived-field refresh
//! always runs.

use chrono::Utc;
use tracing::{error, instrument, warn};

use slipway_core::error::Result;
use slipway_core::payload::{CreatePayload, PayloadRepo, PayloadUser, PushPayload};
use slipway_core::payload::{EMPTY_SHA, TAG_PREFIX};
use slipway_core::types::Release;
use slipway_git::GitRepo;

use crate::service::ReleaseService;

impl ReleaseService {
    /// Ensure the tag named by the release exists and back-fill the fields
    /// derived from its commit.
    ///
    /// A draft never touches the git backend: it only gets its creation time
    /// stamped. For published releases the tag is created at the resolved
    /// target if missing, and `sha1`, `created_at`, and `num_commits` are
    /// refreshed from the tag commit whether or not the tag was just created.
    #[instrument(skip(self, git, rel), fields(repo_id = rel.repo_id, tag = %rel.tag_name, draft = rel.is_draft))]
    pub(crate) fn reconcile_tag(&self, git: &GitRepo, rel: &mut Release) -> Result<()> {
        if rel.is_draft {
            rel.created_at = Utc::now();
            return Ok(());
        }

        let mut refresh_hooks = false;

        if !git.tag_exists(&rel.tag_name) {
            let commit = git.resolve_commit(&rel.target)?;

            // Strip a leading "--" so the name cannot be taken for a flag
            if let Some(stripped) = rel.tag_name.strip_prefix("--") {
                rel.tag_name = stripped.to_string();
            }

            git.create_tag(&rel.tag_name, &commit.sha)?;
            rel.refresh_lower_tag_name();

            // Payload construction is best-effort: a failed repository lookup
            // skips notification without failing the reconcile.
            match self.store.repository_by_id(rel.repo_id) {
                Err(e) => {
                    warn!(error = %e, "loading repository for webhook payloads failed, skipping notification");
                }
                Ok(repo) => {
                    refresh_hooks = true;

                    let sha = match git.tag_commit_id(&rel.tag_name) {
                        Ok(sha) => sha,
                        Err(e) => {
                            error!(tag = %rel.tag_name, error = %e, "resolving tag commit for payload failed");
                            String::new()
                        }
                    };

                    let ref_name = format!("{}{}", TAG_PREFIX, rel.tag_name);
                    let payload_repo = PayloadRepo::from_repository(&repo, &self.settings.app_url);
                    let sender = PayloadUser::from(&rel.publisher);

                    self.notifier.create_ref(CreatePayload {
                        ref_name: ref_name.clone(),
                        sha: sha.clone(),
                        ref_type: "tag".to_string(),
                        repo: payload_repo.clone(),
                        sender: sender.clone(),
                    });
                    self.notifier.push(PushPayload {
                        ref_name,
                        before: EMPTY_SHA.to_string(),
                        after: sha,
                        compare_url: self.settings.app_url.clone(),
                        commits: Vec::new(),
                        repo: payload_repo,
                        pusher: sender.clone(),
                        sender,
                    });
                }
            }
        }

        // The cache refresh fires once reconciliation is over, whether or not
        // the field refresh below succeeded.
        let result = self.refresh_tag_fields(git, rel);
        if refresh_hooks {
            self.hook_queue.add(rel.repo_id);
        }
        result
    }

    /// Refresh `sha1`, `created_at`, and `num_commits` from the tag commit
    fn refresh_tag_fields(&self, git: &GitRepo, rel: &mut Release) -> Result<()> {
        let commit = git.tag_commit(&rel.tag_name)?;
        rel.sha1 = commit.sha;
        rel.created_at = commit.timestamp;
        rel.num_commits = git.commits_count(&rel.sha1)?;
        Ok(())
    }
}
