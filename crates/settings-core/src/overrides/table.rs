//! The Redmine default-override table.
//!
//! Entries are grouped the way Redmine's *Administration → Settings* tabs
//! group them.  Order matters only for logging and for where a schema error
//! is first reported.

use crate::domain::hostname::Hostname;
use crate::domain::value::SettingValue;

/// How the new default for a setting is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideValue {
    /// A fixed string.
    Text(&'static str),
    /// A fixed integer.
    Integer(i64),
    /// `prefix + hostname + suffix`, always a string.
    FromHostname {
        prefix: &'static str,
        suffix: &'static str,
    },
}

impl OverrideValue {
    /// Produces the concrete value for `hostname`.
    #[must_use]
    pub fn resolve(&self, hostname: &Hostname) -> SettingValue {
        match *self {
            Self::Text(s) => s.into(),
            Self::Integer(n) => n.into(),
            Self::FromHostname { prefix, suffix } => format!("{prefix}{hostname}{suffix}").into(),
        }
    }
}

/// One row of an override table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingOverride {
    /// Top-level setting name in `settings.yml`.
    pub key: &'static str,
    pub value: OverrideValue,
}

impl SettingOverride {
    const fn text(key: &'static str, value: &'static str) -> Self {
        Self {
            key,
            value: OverrideValue::Text(value),
        }
    }

    const fn integer(key: &'static str, value: i64) -> Self {
        Self {
            key,
            value: OverrideValue::Integer(value),
        }
    }

    const fn host(key: &'static str, prefix: &'static str, suffix: &'static str) -> Self {
        Self {
            key,
            value: OverrideValue::FromHostname { prefix, suffix },
        }
    }
}

/// Defaults written for a provisioned Redmine instance.
///
/// `self_registration` is a string (`"0"`) while the neighbouring on/off
/// flags are integers; Redmine reads each field with its own type.
pub const REDMINE_OVERRIDES: [SettingOverride; 19] = [
    // General
    // Redmine is published behind a TLS proxy on port 9441
    SettingOverride::host("host_name", "", ":9441"),
    SettingOverride::text("protocol", "https"),
    SettingOverride::text("text_formatting", "common_mark"),
    // Display
    SettingOverride::integer("force_default_language_for_anonymous", 1),
    SettingOverride::integer("force_default_language_for_loggedin", 1),
    // Authentication
    SettingOverride::integer("login_required", 1),
    SettingOverride::text("self_registration", "0"),
    SettingOverride::integer("lost_password", 0),
    SettingOverride::integer("twofa", 0),
    // Projects
    SettingOverride::integer("default_projects_public", 0),
    // Users
    SettingOverride::integer("max_additional_emails", 0),
    SettingOverride::host("email_domains_allowed", "", ""),
    SettingOverride::integer("unsubscribe", 0),
    // Issue tracking
    SettingOverride::integer("cross_project_issue_relations", 1),
    SettingOverride::text("link_copied_issue", "no"),
    SettingOverride::text("cross_project_subtasks", "system"),
    SettingOverride::integer("default_issue_start_date_to_creation_date", 0),
    SettingOverride::integer("display_subprojects_issues", 0),
    // Email notifications
    SettingOverride::host("mail_from", "redmine@", ""),
];
