//! The settings document: an ordered mapping of setting descriptors.
//!
//! Redmine's `config/settings.yml` looks like this:
//!
//! ```yaml
//! host_name:
//!   default: localhost:3000
//! protocol:
//!   default: http
//!   security_notifications: 1
//! max_additional_emails:
//!   format: int
//!   default: 5
//! ```
//!
//! Each top-level key is a setting name and each value is a descriptor
//! mapping.  Only the `default` field of a descriptor is ever written; all
//! other keys and all other settings are carried through unchanged.  The
//! underlying [`Mapping`] keeps insertion order, so the emitted file lists
//! settings in the order they were read.
//!
//! The file is read back by Redmine through a YAML 1.1 loader, which resolves
//! plain `yes`, `no`, `on`, `off` and friends to booleans.  Strings spelled
//! like those words are therefore always written single-quoted.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Name of the descriptor field holding a setting's default value.
pub const DEFAULT_FIELD: &str = "default";

/// Words a YAML 1.1 loader resolves to a boolean or null when unquoted.
/// Matched case-insensitively.
const YAML11_RESERVED: [&str; 10] = [
    "y", "n", "yes", "no", "on", "off", "true", "false", "null", "~",
];

/// Schema errors raised when a setting cannot be read or written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The setting name is not present at the top level.
    #[error("setting '{key}' is missing from the settings document")]
    MissingKey { key: String },

    /// The setting exists but its descriptor has no `default` field.
    #[error("setting '{key}' has no 'default' field")]
    MissingDefault { key: String },

    /// The setting's value is not a mapping, so it has no fields at all.
    #[error("setting '{key}' is a {found}, expected a mapping")]
    NotADescriptor { key: String, found: &'static str },
}

/// Errors converting between YAML text and a [`SettingsDocument`].
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("settings document must be a mapping, found {found}")]
    RootNotMapping { found: &'static str },
}

/// In-memory settings document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsDocument {
    entries: Mapping,
}

impl SettingsDocument {
    /// Parses YAML text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Yaml`] if the text is not well-formed YAML and
    /// [`FormatError::RootNotMapping`] if the top-level node is anything other
    /// than a mapping (an empty file parses as `null`).
    pub fn from_yaml_str(text: &str) -> Result<Self, FormatError> {
        match serde_yaml::from_str::<Value>(text)? {
            Value::Mapping(entries) => Ok(Self { entries }),
            other => Err(FormatError::RootNotMapping {
                found: kind_of(&other),
            }),
        }
    }

    /// Emits the document as YAML text.
    ///
    /// Keys and string values that a YAML 1.1 reader would take for a boolean
    /// or null (`no`, `On`, `~`, ...) are emitted single-quoted.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Yaml`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String, FormatError> {
        let plain = serde_yaml::to_string(&self.entries)?;

        // serde_yaml only quotes what its own YAML 1.2 resolver would misread,
        // so reserved words are swapped for markers and quoted afterwards.
        let prefix = unused_marker_prefix(&plain);
        let mut words = Vec::new();
        let masked = mask_reserved(Value::Mapping(self.entries.clone()), &prefix, &mut words);
        if words.is_empty() {
            return Ok(plain);
        }

        let mut text = serde_yaml::to_string(&masked)?;
        for (index, word) in words.iter().enumerate() {
            text = text.replacen(&marker(&prefix, index), &format!("'{word}'"), 1);
        }
        Ok(text)
    }

    /// Number of top-level settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the raw descriptor node for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Setting names in document order.  Non-string keys are skipped.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().filter_map(Value::as_str)
    }

    /// Reads the `default` field of setting `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MissingKey`], [`DocumentError::NotADescriptor`]
    /// or [`DocumentError::MissingDefault`] depending on which level of the
    /// lookup failed.
    pub fn default_of(&self, key: &str) -> Result<&Value, DocumentError> {
        let descriptor = match self.entries.get(key) {
            Some(Value::Mapping(map)) => map,
            Some(other) => {
                return Err(DocumentError::NotADescriptor {
                    key: key.to_string(),
                    found: kind_of(other),
                })
            }
            None => {
                return Err(DocumentError::MissingKey {
                    key: key.to_string(),
                })
            }
        };
        descriptor
            .get(DEFAULT_FIELD)
            .ok_or_else(|| DocumentError::MissingDefault {
                key: key.to_string(),
            })
    }

    /// Replaces the `default` field of setting `key`, returning the previous
    /// value.
    ///
    /// The field must already exist; this never inserts a new setting or a
    /// new `default` field.
    ///
    /// # Errors
    ///
    /// Same as [`SettingsDocument::default_of`].  On error the document is
    /// left untouched.
    pub fn set_default(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<Value, DocumentError> {
        let descriptor = match self.entries.get_mut(key) {
            Some(Value::Mapping(map)) => map,
            Some(other) => {
                return Err(DocumentError::NotADescriptor {
                    key: key.to_string(),
                    found: kind_of(other),
                })
            }
            None => {
                return Err(DocumentError::MissingKey {
                    key: key.to_string(),
                })
            }
        };
        let slot = descriptor
            .get_mut(DEFAULT_FIELD)
            .ok_or_else(|| DocumentError::MissingDefault {
                key: key.to_string(),
            })?;
        Ok(std::mem::replace(slot, value.into()))
    }
}

fn is_yaml11_reserved(text: &str) -> bool {
    YAML11_RESERVED
        .iter()
        .any(|word| word.eq_ignore_ascii_case(text))
}

/// First `yaml11-word-N` prefix that does not occur anywhere in `text`.
fn unused_marker_prefix(text: &str) -> String {
    (0_u64..)
        .map(|n| format!("yaml11-word-{n}"))
        .find(|prefix| !text.contains(prefix.as_str()))
        .unwrap_or_default()
}

fn marker(prefix: &str, index: usize) -> String {
    format!("{prefix}_{index}_q")
}

/// Replaces every reserved-word string in `value` with a plain-scalar marker,
/// recording the original words in marker order.
fn mask_reserved(value: Value, prefix: &str, words: &mut Vec<String>) -> Value {
    match value {
        Value::String(text) if is_yaml11_reserved(&text) => {
            let token = marker(prefix, words.len());
            words.push(text);
            Value::String(token)
        }
        Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| mask_reserved(item, prefix, words))
                .collect(),
        ),
        Value::Mapping(entries) => Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| {
                    let key = mask_reserved(key, prefix, words);
                    (key, mask_reserved(value, prefix, words))
                })
                .collect(),
        ),
        Value::Tagged(mut tagged) => {
            let inner = std::mem::replace(&mut tagged.value, Value::Null);
            tagged.value = mask_reserved(inner, prefix, words);
            Value::Tagged(tagged)
        }
        other => other,
    }
}

/// Human-readable name of a YAML node kind, used in error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
