//! Core data model for releases and their collaborators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// A named, versioned publication of repository contents, backed by a git tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Record identifier, assigned on insert
    pub id: i64,
    /// Owning repository
    pub repo_id: i64,
    /// Tag name as entered by the publisher
    pub tag_name: String,
    /// ASCII-lowercased tag name, used for case-insensitive uniqueness
    pub lower_tag_name: String,
    /// Branch or commit the tag should point at; only consulted at creation
    pub target: String,
    /// Commit the tag resolves to, derived from the backend
    pub sha1: String,
    /// For published releases, the tag commit's authorship time;
    /// for drafts, wall-clock time at creation
    pub created_at: DateTime<Utc>,
    /// Commits reachable from the tag commit
    pub num_commits: i64,
    /// Draft releases have no materialized tag
    pub is_draft: bool,
    pub is_prerelease: bool,
    /// A record with `is_tag` and no title/body is a bare tag
    pub is_tag: bool,
    pub title: String,
    pub note: String,
    /// Identity that published the release, resolved by the caller
    pub publisher: User,
    /// Attachment records linked to this release
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Release {
    /// Create a release with the required fields; everything else defaults
    pub fn new(repo_id: i64, tag_name: impl Into<String>, publisher: User) -> Self {
        let tag_name = tag_name.into();
        let lower_tag_name = tag_name.to_ascii_lowercase();

        Self {
            id: 0,
            repo_id,
            tag_name,
            lower_tag_name,
            target: String::new(),
            sha1: String::new(),
            created_at: Utc::now(),
            num_commits: 0,
            is_draft: false,
            is_prerelease: false,
            is_tag: false,
            title: String::new(),
            note: String::new(),
            publisher,
            attachments: Vec::new(),
        }
    }

    /// Set the target reference
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Mark as draft
    pub fn as_draft(mut self) -> Self {
        self.is_draft = true;
        self
    }

    /// Mark as prerelease
    pub fn as_prerelease(mut self) -> Self {
        self.is_prerelease = true;
        self
    }

    /// Recompute `lower_tag_name` from `tag_name`.
    ///
    /// Must be called whenever `tag_name` may have changed.
    pub fn refresh_lower_tag_name(&mut self) {
        self.lower_tag_name = self.tag_name.to_ascii_lowercase();
    }

    /// Whether this record represents a bare tag with no release semantics
    pub fn is_bare_tag(&self) -> bool {
        self.is_tag && self.title.is_empty() && self.note.is_empty()
    }
}

/// A binary file linked to a release.
///
/// The link record is owned by the release; the stored payload lives
/// independently under the attachment root and is purged at hard deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub uuid: Uuid,
    /// Display file name
    pub name: String,
    pub repo_id: i64,
    /// Zero until linked to a release
    pub release_id: i64,
}

impl Attachment {
    pub fn new(uuid: Uuid, name: impl Into<String>, repo_id: i64) -> Self {
        Self {
            uuid,
            name: name.into(),
            repo_id,
            release_id: 0,
        }
    }

    /// Stored payload path under the attachment root, fanned out by UUID
    pub fn local_path(&self, root: &std::path::Path) -> PathBuf {
        let hex = self.uuid.simple().to_string();
        root.join(&hex[0..1]).join(&hex[1..2]).join(hex)
    }
}

/// A hosted repository, as much of it as release handling needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: i64,
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(id: i64, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// `owner/name` form used in payloads
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Web URL of the repository under the given application base URL
    pub fn html_url(&self, base_url: &str) -> String {
        format!("{}{}/{}", base_url, self.owner, self.name)
    }
}

/// A resolved user identity supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}
