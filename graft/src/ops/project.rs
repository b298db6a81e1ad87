//! Project loading and input resolution shared by the commands.

use std::path::{Path, PathBuf};

use eyre::{Result, bail};
use graft_manifest::Manifest;
use graft_source::SourceFile;

/// Input name that reads Go source from stdin.
pub const STDIN: &str = "-";

/// A loaded manifest plus the directory its relative paths resolve against.
#[derive(Debug)]
pub struct Project {
    pub manifest: Manifest,
    base: PathBuf,
}

impl Project {
    /// Load `config`, or `graft.toml` in the working directory when present.
    pub fn load(config: Option<&Path>) -> graft_manifest::Result<Self> {
        let manifest = Manifest::load(config, Path::new("."))?;
        let base = config
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(Self::from_manifest(manifest, base))
    }

    pub fn from_manifest(manifest: Manifest, base: impl Into<PathBuf>) -> Self {
        Self {
            manifest,
            base: base.into(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.manifest.project.name.as_deref()
    }

    /// Command-line inputs win over the manifest's `inputs`.
    pub fn inputs(&self, overrides: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let inputs: Vec<PathBuf> = if overrides.is_empty() {
            self.manifest
                .inputs
                .iter()
                .map(|input| {
                    if input == STDIN {
                        PathBuf::from(STDIN)
                    } else {
                        self.base.join(input)
                    }
                })
                .collect()
        } else {
            overrides.to_vec()
        };

        if inputs.is_empty() {
            bail!("no input files; pass them as arguments or list them under `inputs` in graft.toml");
        }
        if inputs.iter().filter(|i| is_stdin(i)).count() > 1 {
            bail!("stdin ('-') can only be read once");
        }

        Ok(inputs)
    }

    /// The `-o` override, else `project.output` relative to the manifest.
    pub fn output_dir(&self, overridden: Option<&Path>) -> PathBuf {
        match overridden {
            Some(dir) => dir.to_path_buf(),
            None => self.base.join(&self.manifest.project.output),
        }
    }
}

/// One parsed input, ready for the pipeline.
#[derive(Debug)]
pub struct SourceUnit {
    pub input: PathBuf,
    pub source: SourceFile,
}

pub fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == STDIN
}

/// Read and parse every input, stopping at the first failure.
pub fn read_sources(inputs: &[PathBuf]) -> graft_source::Result<Vec<SourceUnit>> {
    inputs
        .iter()
        .map(|input| -> graft_source::Result<SourceUnit> {
            let source = if is_stdin(input) {
                graft_source::parse_stdin()?
            } else {
                graft_source::parse_file(input)?
            };
            Ok(SourceUnit {
                input: input.clone(),
                source,
            })
        })
        .collect()
}
