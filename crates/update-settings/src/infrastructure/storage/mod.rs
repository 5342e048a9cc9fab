//! Storage infrastructure: settings file persistence.
//!
//! The `settings_file` sub-module implements
//! [`SettingsStore`](crate::application::update_settings::SettingsStore) for
//! a YAML file on disk.

pub mod settings_file;

pub use settings_file::{YamlSettingsFile, DEFAULT_SETTINGS_PATH};
