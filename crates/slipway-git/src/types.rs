//! Git types

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Information about a git commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit hash (full)
    pub sha: String,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Authorship timestamp
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    /// Create a new CommitInfo
    pub fn new(
        sha: impl Into<String>,
        author: impl Into<String>,
        author_email: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            sha: sha.into(),
            author: author.into(),
            author_email: author_email.into(),
            timestamp,
        }
    }
}

/// Convert a git2 Commit to CommitInfo
pub(crate) fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let author = commit.author();

    let timestamp = Utc
        .timestamp_opt(author.when().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    CommitInfo::new(
        commit.id().to_string(),
        author.name().unwrap_or("Unknown"),
        author.email().unwrap_or("unknown@example.com"),
        timestamp,
    )
}
