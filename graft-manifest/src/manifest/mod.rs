//! Manifest types and parsing for graft.toml files.

mod parse;
mod project;
mod target;

use serde::Deserialize;

pub use project::ProjectConfig;
pub use target::Target;

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_FILE_NAME: &str = "graft.toml";

/// Root manifest for graft.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Go source files to translate; `-` reads stdin
    #[serde(default)]
    pub inputs: Vec<String>,

    /// Project settings
    #[serde(default)]
    pub project: ProjectConfig,
}
