//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use miette::SourceSpan;

use super::{DEFAULT_FILE_NAME, Manifest};
use crate::{Error, Result, error::Document};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILE_NAME)
    }
}

impl Manifest {
    /// Parse a graft.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a graft.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Load the manifest for a run.
    ///
    /// An explicit path must exist. Without one, `graft.toml` in `dir` is
    /// used if present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = dir.join(DEFAULT_FILE_NAME);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let doc = Document::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| doc.parse_error(e))?;
    validate_manifest(&manifest, doc)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, doc: Document<'_>) -> Result<()> {
    if let Some(name) = &manifest.project.name
        && name.trim().is_empty()
    {
        return Err(doc.invalid(
            "project name must not be empty",
            Some("remove the key to fall back to no project name"),
            find_key_span(doc.text, "name"),
        ));
    }

    for input in &manifest.inputs {
        if input != "-" && !input.ends_with(".go") {
            return Err(doc.invalid(
                format!("input '{}' is not a .go file", input),
                Some("inputs are Go source files, or '-' for stdin"),
                find_string_span(doc.text, input),
            ));
        }
    }

    Ok(())
}

/// Locate a quoted string value in the source, excluding the quotes.
fn find_string_span(src: &str, value: &str) -> Option<SourceSpan> {
    ['"', '\'']
        .iter()
        .find_map(|q| src.find(&format!("{q}{value}{q}")))
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.lines()
        .scan(0, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some((start, line))
        })
        .find_map(|(start, line)| {
            let trimmed = line.trim_start();
            let rest = trimmed.strip_prefix(key)?;
            rest.trim_start().starts_with('=').then(|| {
                let indent = line.len() - trimmed.len();
                SourceSpan::from((start + indent, key.len()))
            })
        })
}
