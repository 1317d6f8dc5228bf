//! Prelude module for hijri_picker crate.
//!
//! Re-exports the derive macros and date traits used across the modules.

#[allow(unused_imports)]
pub use chrono::Datelike;
#[allow(unused_imports)]
pub use derive_more::Display;
