//! update-settings library crate.
//!
//! Re-exports the layers so that integration tests in `tests/` and the
//! binary entry point in `main.rs` share the same module tree.
//!
//! ```text
//! main.rs          clap CLI, logging, exit status
//!   application/   UpdateSettingsUseCase over the SettingsStore trait
//!   infrastructure/
//!     storage/     YamlSettingsFile: reads and overwrites settings.yml
//! ```
//!
//! **Dependency rule**: `application` depends on `settings_core` only and
//! never imports `infrastructure`.

pub mod application;
pub mod infrastructure;
