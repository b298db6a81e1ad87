//! Core utilities and types for the graft struct translator.
//!
//! This crate provides the small pieces shared by every other crate in the
//! workspace: writing generated files and identifier case conversion.

mod file;
mod utils;

// File operations
pub use file::{WriteResult, write_if_changed};
// String utilities
pub use utils::{output_file_name, to_pascal_case};
