//! Infrastructure layer: adapters that touch the file system.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `settings_core`, but MUST NOT be imported by the `application` layer.

pub mod storage;
