//! Application layer use cases.
//!
//! - **`update_settings`** – Loads the settings document through a
//!   [`SettingsStore`](update_settings::SettingsStore), applies the Redmine
//!   override table for a hostname, and saves the result only if every
//!   override succeeded.

pub mod update_settings;
