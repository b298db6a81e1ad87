//! `graft.toml` project configuration.
//!
//! Every key is optional; a project without a `graft.toml` runs on
//! [`Manifest::default`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{DEFAULT_FILE_NAME, Manifest, ProjectConfig, Target};
