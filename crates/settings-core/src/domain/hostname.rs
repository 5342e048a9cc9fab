//! Validated deployment hostname.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors returned when a hostname is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostnameError {
    #[error("hostname must not be empty")]
    Empty,
    #[error("hostname {0:?} must not contain whitespace")]
    ContainsWhitespace(String),
}

/// The public hostname the Redmine instance is deployed under.
///
/// Every hostname-derived default (`host_name`, `email_domains_allowed`,
/// `mail_from`) is built from this type, so an absent or blank hostname can
/// never be written into the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(String);

impl Hostname {
    /// Validates and wraps `value`.
    ///
    /// # Errors
    ///
    /// Returns [`HostnameError::Empty`] for an empty string and
    /// [`HostnameError::ContainsWhitespace`] if any whitespace is present.
    pub fn parse(value: impl Into<String>) -> Result<Self, HostnameError> {
        let value = value.into();
        if value.is_empty() {
            return Err(HostnameError::Empty);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(HostnameError::ContainsWhitespace(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Hostname {
    type Err = HostnameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
