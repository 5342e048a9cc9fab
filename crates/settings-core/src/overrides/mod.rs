//! Default overrides applied at deployment time.
//!
//! - **`table`** – The fixed, ordered list of settings to override and the
//!   value each one receives.  Some values are constants; the rest are built
//!   from the deployment hostname.
//!
//! - **`apply`** – Writes a table into a [`SettingsDocument`] and reports what
//!   changed.
//!
//! [`SettingsDocument`]: crate::domain::document::SettingsDocument

pub mod apply;
pub mod table;
