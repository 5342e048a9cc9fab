//! # settings-core
//!
//! Domain model for provisioning a Redmine `config/settings.yml` file.
//!
//! The crate has no file-system or process dependencies: it parses and emits
//! YAML text, models the settings document, and applies the fixed table of
//! default overrides for a deployment hostname.  Reading and writing the file
//! is the job of the `update-settings` crate.
//!
//! # Architecture overview
//!
//! - **`domain`** – The settings document (an ordered mapping of setting
//!   descriptors), the [`SettingValue`] tagged union written into it, and the
//!   validated [`Hostname`].
//!
//! - **`overrides`** – The ordered override table ([`REDMINE_OVERRIDES`]) and
//!   [`apply_overrides`], which writes each entry into the matching
//!   descriptor's `default` field.

pub mod domain;
pub mod overrides;

pub use domain::document::{DocumentError, FormatError, SettingsDocument, DEFAULT_FIELD};
pub use domain::hostname::{Hostname, HostnameError};
pub use domain::value::SettingValue;
pub use overrides::apply::{apply_overrides, AppliedOverride};
pub use overrides::table::{OverrideValue, SettingOverride, REDMINE_OVERRIDES};
