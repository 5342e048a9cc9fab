//! UpdateSettingsUseCase: load → apply overrides → save.
//!
//! The use case works against the [`SettingsStore`] trait rather than the
//! file system directly, so the ordering guarantees below can be tested with
//! a mock store:
//!
//! - Nothing is saved unless the document loaded successfully.
//! - Nothing is saved unless every override found its setting and `default`
//!   field.  A schema error therefore never leaves a half-patched file.

use std::path::PathBuf;

use settings_core::{
    apply_overrides, DocumentError, FormatError, Hostname, SettingOverride, SettingsDocument,
    REDMINE_OVERRIDES,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors reported by a [`SettingsStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The settings file could not be read or written.
    #[error("I/O error accessing settings at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a YAML mapping.
    #[error("failed to parse settings at {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// The document could not be emitted as YAML.
    #[error("failed to serialize settings for {}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// Where a settings document is read from and written back to.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore {
    /// Human-readable location, used in logs and the final report.
    fn location(&self) -> PathBuf;

    /// Reads and parses the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] or [`StorageError::Parse`].
    fn load(&self) -> Result<SettingsDocument, StorageError>;

    /// Replaces the stored document with `document`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] or [`StorageError::Serialize`].
    fn save(&self, document: &SettingsDocument) -> Result<(), StorageError>;
}

/// Error type for the update use case, one variant per failure stage.
#[derive(Debug, Error)]
pub enum UpdateSettingsError {
    #[error("could not load the settings document")]
    Load(#[source] StorageError),

    #[error("settings document is missing an expected entry")]
    Schema(#[from] DocumentError),

    #[error("could not save the settings document")]
    Save(#[source] StorageError),
}

/// Inputs for one run, built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub hostname: Hostname,
    pub settings_path: PathBuf,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Location the document was written to.
    pub path: PathBuf,
    /// Number of defaults written.
    pub applied: usize,
    /// Number of defaults whose value or type actually differed.
    pub changed: usize,
}

/// Applies an override table to the document held by a [`SettingsStore`].
pub struct UpdateSettingsUseCase<S> {
    store: S,
    overrides: &'static [SettingOverride],
}

impl<S: SettingsStore> UpdateSettingsUseCase<S> {
    /// Creates a use case that applies [`REDMINE_OVERRIDES`].
    pub fn new(store: S) -> Self {
        Self::with_overrides(store, &REDMINE_OVERRIDES)
    }

    pub fn with_overrides(store: S, overrides: &'static [SettingOverride]) -> Self {
        Self { store, overrides }
    }

    /// Runs load → apply → save for `hostname`.
    ///
    /// # Errors
    ///
    /// - [`UpdateSettingsError::Load`] if the store cannot produce a document.
    /// - [`UpdateSettingsError::Schema`] if a target setting or its `default`
    ///   field is absent.  The store is not written.
    /// - [`UpdateSettingsError::Save`] if writing the document fails.
    pub fn execute(&self, hostname: &Hostname) -> Result<UpdateReport, UpdateSettingsError> {
        let path = self.store.location();
        info!(path = %path.display(), %hostname, "loading settings");

        let mut document = self.store.load().map_err(UpdateSettingsError::Load)?;
        debug!(settings = document.len(), "settings loaded");

        let applied = apply_overrides(&mut document, self.overrides, hostname)?;
        let changed = applied.iter().filter(|a| a.changed()).count();

        self.store
            .save(&document)
            .map_err(UpdateSettingsError::Save)?;
        info!(
            path = %path.display(),
            applied = applied.len(),
            changed,
            "settings written"
        );

        Ok(UpdateReport {
            path,
            applied: applied.len(),
            changed,
        })
    }
}
