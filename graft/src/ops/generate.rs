//! Generate operation - translate parsed inputs into the target format.

use std::{collections::HashMap, path::Path};

use eyre::{Context, Result, bail};
use graft_codegen::{language::write_previews, pipeline::Pipeline};

use super::{located, project::SourceUnit};
use crate::{
    reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult},
    target::TargetSupport,
};

/// Where generated text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Write files into the output directory.
    Write,
    /// Preview paths and contents without writing.
    DryRun,
    /// Print the generated text.
    Stdout,
}

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    pub project: Option<&'a str>,
    pub output_dir: &'a Path,
    pub mode: OutputMode,
}

/// Execute the generate operation.
///
/// Each input runs through its own pipeline and is rendered before any file
/// is written, so a failing input or two inputs claiming the same output
/// file leave the output directory untouched.
pub fn generate(
    units: Vec<SourceUnit>,
    target: TargetSupport,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let pipeline = Pipeline::new();

    let mut contexts = Vec::with_capacity(units.len());
    for unit in units {
        let ctx = pipeline
            .run(unit.source)
            .wrap_err_with(|| format!("Pipeline failed for '{}'", unit.input.display()))?;
        contexts.push((unit.input, ctx));
    }

    let warnings = contexts
        .iter()
        .flat_map(|(input, ctx)| ctx.warnings().map(move |d| located(input, d)))
        .collect();
    let struct_count = contexts.iter().map(|(_, ctx)| ctx.source.structs.len()).sum();

    // Render everything before touching the output directory.
    let mut previews = Vec::new();
    let mut sources: HashMap<String, &Path> = HashMap::new();
    for (input, ctx) in &contexts {
        for file in target.generator(&ctx.source, input).preview() {
            if let Some(first) = sources.insert(file.path.clone(), input.as_path()) {
                bail!(
                    "'{}' and '{}' would both generate '{}'",
                    first.display(),
                    input.display(),
                    file.path
                );
            }
            previews.push(file);
        }
    }

    let result = match opts.mode {
        OutputMode::Write => {
            let generated = write_previews(opts.output_dir, previews)
                .wrap_err("Failed to write generated files")?;
            GenerationResult::Written(WrittenResult {
                output_dir: opts.output_dir.to_path_buf(),
                written: generated.written,
                unchanged: generated.unchanged,
            })
        }
        OutputMode::DryRun => GenerationResult::Preview(PreviewResult {
            files: previews.into_iter().map(report_file).collect(),
        }),
        OutputMode::Stdout => GenerationResult::Stdout(PreviewResult {
            files: previews.into_iter().map(report_file).collect(),
        }),
    };

    Ok(GenerateReport {
        project: opts.project.map(str::to_string),
        target: target.target().to_string(),
        warnings,
        struct_count,
        result,
    })
}

fn report_file(file: graft_codegen::language::PreviewFile) -> PreviewFile {
    PreviewFile {
        path: file.path,
        content: file.content,
    }
}
