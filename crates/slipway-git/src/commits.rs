//! Commit resolution and counting

use git2::Oid;

use crate::repository::{GitRepo, Result};
use crate::types::{commit_to_info, CommitInfo};
use slipway_core::error::GitError;

impl GitRepo {
    /// Resolve a refspec (branch, tag, or commit hash) to a commit
    pub fn resolve_commit(&self, refspec: &str) -> Result<CommitInfo> {
        let commit = self
            .repo
            .revparse_single(refspec)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|source| GitError::CommitResolution {
                refspec: refspec.to_string(),
                source,
            })?;

        Ok(commit_to_info(&commit))
    }

    /// Count commits reachable from the given commit, inclusive
    pub fn commits_count(&self, sha: &str) -> Result<i64> {
        let count_from = |sha: &str| -> std::result::Result<i64, git2::Error> {
            let oid = Oid::from_str(sha)?;
            let mut revwalk = self.repo.revwalk()?;
            revwalk.push(oid)?;

            let mut count = 0i64;
            for oid in revwalk {
                oid?;
                count += 1;
            }
            Ok(count)
        };

        count_from(sha).map_err(|source| GitError::CommitCount {
            sha: sha.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::repo_with_commits;

    #[test]
    fn test_resolve_commit_by_branch() {
        let (_temp, repo) = repo_with_commits(2);
        let head = repo.head_commit().unwrap().id().to_string();
        let commit = repo.resolve_commit("HEAD").unwrap();
        assert_eq!(commit.sha, head);
        assert_eq!(commit.author, "Test");
    }

    #[test]
    fn test_resolve_commit_invalid_ref() {
        let (_temp, repo) = repo_with_commits(1);
        let result = repo.resolve_commit("no-such-branch");
        assert!(matches!(result, Err(GitError::CommitResolution { .. })));
    }

    #[test]
    fn test_commits_count() {
        let (_temp, repo) = repo_with_commits(3);
        let head = repo.head_commit().unwrap().id().to_string();
        assert_eq!(repo.commits_count(&head).unwrap(), 3);
    }

    #[test]
    fn test_commits_count_bad_sha() {
        let (_temp, repo) = repo_with_commits(1);
        let result = repo.commits_count("not-a-sha");
        assert!(matches!(result, Err(GitError::CommitCount { .. })));
    }
}
