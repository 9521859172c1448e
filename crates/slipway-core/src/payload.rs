//! Webhook payload types handed to the notification sink

use serde::{Deserialize, Serialize};

use crate::types::{Repository, User};

/// Full ref prefix for tags
pub const TAG_PREFIX: &str = "refs/tags/";

/// The all-zero SHA used as the before-commit of a ref creation push
pub const EMPTY_SHA: &str = "0000000000000000000000000000000000000000";

/// Repository fields exposed in payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadRepo {
    pub id: i64,
    pub full_name: String,
    pub html_url: String,
}

impl PayloadRepo {
    /// Build from a repository record and the application base URL
    pub fn from_repository(repo: &Repository, base_url: &str) -> Self {
        Self {
            id: repo.id,
            full_name: repo.full_name(),
            html_url: repo.html_url(base_url),
        }
    }
}

/// User fields exposed in payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&User> for PayloadUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// A commit entry inside a push payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadCommit {
    pub sha: String,
    pub message: String,
}

/// Payload for a ref-created event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayload {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub sha: String,
    pub ref_type: String,
    pub repo: PayloadRepo,
    pub sender: PayloadUser,
}

/// Payload for a push event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushPayload {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub before: String,
    pub after: String,
    pub compare_url: String,
    pub commits: Vec<PayloadCommit>,
    pub repo: PayloadRepo,
    pub pusher: PayloadUser,
    pub sender: PayloadUser,
}
