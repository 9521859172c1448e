//! Error types for Slipway

use thiserror::Error;

/// Result type alias using ReleaseError
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for release operations
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Persistence-related errors
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A release with the same tag name already exists in the repository
    #[error("release already exists for tag: {tag_name}")]
    ReleaseAlreadyExists { tag_name: String },

    /// Failed to load auxiliary attributes for a release
    #[error("failed to load release attributes: {0}")]
    LoadAttributes(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Git repository not found
    #[error("git repository not found at {0}")]
    RepositoryNotFound(std::path::PathBuf),

    /// Failed to open repository
    #[error("failed to open repository: {0}")]
    OpenFailed(String),

    /// Failed to resolve a reference to a commit
    #[error("failed to resolve '{refspec}' to a commit: {source}")]
    CommitResolution {
        refspec: String,
        source: git2::Error,
    },

    /// Failed to count commits reachable from a commit
    #[error("failed to count commits from {sha}: {source}")]
    CommitCount { sha: String, source: git2::Error },

    /// Tag name rejected by the backend
    #[error("invalid tag name: {tag_name}")]
    InvalidTagName { tag_name: String },

    /// Tag not found
    #[error("tag not found: {0}")]
    TagNotFound(String),

    /// Git2 library error
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Persistence-layer errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Release record not found
    #[error("release not found: {0}")]
    ReleaseNotFound(i64),

    /// Repository record not found
    #[error("repository not found: {0}")]
    RepositoryNotFound(i64),

    /// Unique index violation on (repository, tag name)
    #[error("release already exists for tag: {tag_name}")]
    AlreadyExists { tag_name: String },

    /// Backend failure
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Settings-related errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file not found
    #[error("settings file not found at {0}")]
    NotFound(std::path::PathBuf),

    /// TOML parsing error
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading settings: {0}")]
    Io(#[from] std::io::Error),
}
