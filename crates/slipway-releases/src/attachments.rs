//! Physical attachment payload storage

use std::path::PathBuf;

use tracing::debug;

use slipway_core::types::Attachment;

/// Storage backend for attachment payloads.
///
/// Only removal is needed here; uploads are handled by the upload flow
/// before a release ever sees the attachment.
pub trait AttachmentStore: Send + Sync {
    /// Remove the stored payload for an attachment
    fn remove(&self, attachment: &Attachment) -> std::io::Result<()>;
}

/// Filesystem-backed attachment store rooted at a configured directory
pub struct FsAttachmentStore {
    root: PathBuf,
}

impl FsAttachmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Stored payload path for an attachment
    pub fn local_path(&self, attachment: &Attachment) -> PathBuf {
        attachment.local_path(&self.root)
    }
}

impl AttachmentStore for FsAttachmentStore {
    fn remove(&self, attachment: &Attachment) -> std::io::Result<()> {
        let path = self.local_path(attachment);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                debug!(uuid = %attachment.uuid, path = %path.display(), "removed attachment payload");
                Ok(())
            }
            // Already gone: nothing to do
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
