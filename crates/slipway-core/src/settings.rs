//! Externally-configured settings the release core consumes

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SettingsError;

/// Settings for release handling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Application base URL, used as the compare URL base in push payloads.
    /// Always ends with a trailing slash.
    pub app_url: String,

    /// Root directory for stored attachment payloads
    pub attachment_root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_url: "http://localhost:3000/".to_string(),
            attachment_root: PathBuf::from("data/attachments"),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        info!(path = %path.display(), "loading settings");

        if !path.exists() {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let mut settings: Settings = toml::from_str(&content)?;
        settings.normalize();

        debug!(app_url = %settings.app_url, "settings loaded");
        Ok(settings)
    }

    /// Ensure invariants hold regardless of what the file contained
    fn normalize(&mut self) {
        if !self.app_url.ends_with('/') {
            self.app_url.push('/');
        }
    }
}
