use std::path::PathBuf;

use serde::Deserialize;

use super::Target;

/// `[project]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Informational project name, shown in reports
    pub name: Option<String>,

    /// Output format
    #[serde(default)]
    pub target: Target,

    /// Directory generated files are written to
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            target: Target::default(),
            output: default_output(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}
