//! Domain types for the settings document.
//!
//! Nothing in this module touches the file system.  The document is built
//! from YAML text and turned back into YAML text; callers decide where that
//! text comes from and where it goes.

pub mod document;
pub mod hostname;
pub mod value;
