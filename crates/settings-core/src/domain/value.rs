//! Typed values written into a setting's `default` field.
//!
//! Redmine reads some flags as integers and others as strings, and the two
//! are not interchangeable: `self_registration` must stay the string `"0"`
//! while `lost_password` is the integer `0`.  [`SettingValue`] keeps that
//! distinction all the way to the emitted YAML.

use std::fmt;

use serde_yaml::Value;

/// A value assigned to a setting default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Emitted as a YAML integer (`0`, `1`).
    Integer(i64),
    /// Emitted as a YAML string.  Numeric-looking text such as `"0"` is
    /// quoted on output so it reads back as a string.
    Text(String),
}

impl SettingValue {
    /// Converts into the YAML node stored in the document.
    #[must_use]
    pub fn to_yaml(&self) -> Value {
        self.clone().into()
    }
}

impl From<SettingValue> for Value {
    fn from(value: SettingValue) -> Self {
        match value {
            SettingValue::Integer(n) => Value::Number(n.into()),
            SettingValue::Text(s) => Value::String(s),
        }
    }
}

impl From<i64> for SettingValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}
