//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Project name from the manifest, if any.
    pub project: Option<String>,

    /// Output format name.
    pub target: String,

    /// Warning messages from the pipeline, already located.
    pub warnings: Vec<String>,

    /// Number of declared structs across all inputs.
    pub struct_count: usize,

    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
    /// Generated text goes to stdout.
    Stdout(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<PathBuf>,
    /// Files that already matched.
    pub unchanged: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.diagnostic(&format!("warning: {}", warning));
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
            GenerationResult::Stdout(preview) => {
                for file in &preview.files {
                    out.raw(&file.content);
                }
            }
        }
    }
}

impl GenerateReport {
    fn header(&self) -> String {
        let structs = format!(
            "{} struct{}",
            self.struct_count,
            if self.struct_count == 1 { "" } else { "s" }
        );
        match &self.project {
            Some(name) => format!("{} ({}, {})", name, self.target, structs),
            None => format!("{} ({})", self.target, structs),
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&self.header());
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }
        for path in &written.unchanged {
            out.list_item(&format!("{} (unchanged)", path.display()));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            preview.files.len(),
            if preview.files.len() == 1 { "" } else { "s" }
        ));
    }
}
