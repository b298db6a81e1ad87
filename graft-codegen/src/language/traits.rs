//! Target-independent code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use graft_core::{WriteResult, write_if_changed};

/// Trait for output generators.
///
/// Implement this trait to add support for a new output format. Generators
/// are built from one parsed source file and produce every output for it
/// in [`preview`](Self::preview); [`generate`](Self::generate) writes those
/// previews to disk.
pub trait LanguageCodegen {
    /// Target identifier (e.g., "cpp", "json")
    fn language(&self) -> &'static str;

    /// File extension for generated files (e.g., "h", "json")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        write_previews(output_dir, self.preview())
    }
}

/// Write rendered files under `output_dir`, in order.
///
/// Callers rendering several inputs collect every preview first, so a
/// rendering failure leaves the output directory untouched.
pub fn write_previews(
    output_dir: &Path,
    previews: impl IntoIterator<Item = PreviewFile>,
) -> Result<GenerateResult> {
    let mut result = GenerateResult::default();
    for preview in previews {
        let path = output_dir.join(&preview.path);
        match write_if_changed(&path, &preview.content)? {
            WriteResult::Written => result.written.push(path),
            WriteResult::Unchanged => result.unchanged.push(path),
        }
    }
    Ok(result)
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content was written
    pub written: Vec<PathBuf>,
    /// Files that already had the generated content
    pub unchanged: Vec<PathBuf>,
}

impl GenerateResult {
    /// All files touched by this run, written first.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.written
            .iter()
            .chain(self.unchanged.iter())
            .map(PathBuf::as_path)
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
