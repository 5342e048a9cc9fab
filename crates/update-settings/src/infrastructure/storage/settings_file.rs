//! YAML-file-backed [`SettingsStore`].
//!
//! Reads `config/settings.yml` (or any other path) in one go and overwrites
//! it in one go.  There is no temp-file-and-rename step: if the write is
//! interrupted the file may be left truncated.  Callers are expected to run
//! with exclusive access to the file.
//!
//! Comments and the original formatting of the file are not preserved; the
//! document is re-emitted by `serde_yaml`.  Setting order, values and value
//! types are.

use std::path::{Path, PathBuf};

use settings_core::SettingsDocument;
use tracing::debug;

use crate::application::update_settings::{SettingsStore, StorageError};

/// Path of Redmine's settings file relative to the Redmine root.
pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.yml";

/// A settings document stored as a YAML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlSettingsFile {
    path: PathBuf,
}

impl YamlSettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for YamlSettingsFile {
    fn default() -> Self {
        Self::new(DEFAULT_SETTINGS_PATH)
    }
}

impl SettingsStore for YamlSettingsFile {
    fn location(&self) -> PathBuf {
        self.path.clone()
    }

    fn load(&self) -> Result<SettingsDocument, StorageError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = content.len(), "read settings file");

        SettingsDocument::from_yaml_str(&content).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, document: &SettingsDocument) -> Result<(), StorageError> {
        // Serialize first so an emit failure never truncates the file.
        let content = document
            .to_yaml_string()
            .map_err(|source| StorageError::Serialize {
                path: self.path.clone(),
                source,
            })?;

        std::fs::write(&self.path, &content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = content.len(), "wrote settings file");
        Ok(())
    }
}
