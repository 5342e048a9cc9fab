//! Applies an override table to a settings document.

use serde_yaml::Value;
use tracing::debug;

use crate::domain::document::{DocumentError, SettingsDocument};
use crate::domain::hostname::Hostname;
use crate::domain::value::SettingValue;
use crate::overrides::table::SettingOverride;

/// Record of one default that was written.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedOverride {
    pub key: &'static str,
    /// The `default` value before the override.
    pub previous: Value,
    /// The `default` value now in the document.
    pub current: SettingValue,
}

impl AppliedOverride {
    /// `false` when the document already held exactly this value and type.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.current.to_yaml()
    }
}

/// Writes every entry of `overrides` into `document`, in table order.
///
/// Each write is an absolute assignment, so applying the same table twice
/// leaves the document as it was after the first pass.
///
/// # Errors
///
/// Stops at the first entry whose setting or `default` field is missing and
/// returns that [`DocumentError`].  Entries before it have already been
/// written to the in-memory document.
pub fn apply_overrides(
    document: &mut SettingsDocument,
    overrides: &[SettingOverride],
    hostname: &Hostname,
) -> Result<Vec<AppliedOverride>, DocumentError> {
    let mut applied = Vec::with_capacity(overrides.len());
    for entry in overrides {
        let current = entry.value.resolve(hostname);
        let previous = document.set_default(entry.key, current.clone())?;
        debug!(key = entry.key, previous = ?previous, current = %current, "default overridden");
        applied.push(AppliedOverride {
            key: entry.key,
            previous,
            current,
        });
    }
    Ok(applied)
}
