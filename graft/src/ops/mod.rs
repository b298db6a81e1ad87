//! Core operations.
//!
//! This module contains the business logic for graft commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod project;

use std::path::Path;

use graft_codegen::pipeline::Diagnostic;

pub use check::check;
pub use generate::{GenerateOptions, OutputMode, generate};
pub use project::{Project, read_sources};

/// Diagnostic message followed by where it was found.
fn located(input: &Path, diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {} ({})", diag.message, input.display(), loc),
        None => format!("{}\n  --> {}", diag.message, input.display()),
    }
}
