use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use graft_manifest::Target;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions, OutputMode, Project},
    reports::{Report, TerminalOutput},
    target::TargetSupport,
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Go source files, `-` for stdin (defaults to `inputs` in graft.toml)
    pub inputs: Vec<PathBuf>,

    /// Path to graft.toml (defaults to ./graft.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides graft.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (overrides graft.toml)
    #[arg(short, long)]
    pub target: Option<Target>,

    /// Preview generated files without writing to disk
    #[arg(long, conflicts_with = "stdout")]
    pub dry_run: bool,

    /// Print generated text instead of writing files
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateCommand {
    pub fn run(&self, quiet: bool) -> Result<()> {
        let project = Project::load(self.config.as_deref()).unwrap_or_exit();

        // CLI flags win over the manifest
        let target = self.target.unwrap_or(project.manifest.project.target);
        let output_dir = project.output_dir(self.output.as_deref());
        let inputs = project.inputs(&self.inputs)?;

        let units = ops::read_sources(&inputs).unwrap_or_exit();

        let mode = if self.stdout {
            OutputMode::Stdout
        } else if self.dry_run {
            OutputMode::DryRun
        } else {
            OutputMode::Write
        };

        let report = ops::generate(
            units,
            TargetSupport::get(target),
            GenerateOptions {
                project: project.name(),
                output_dir: &output_dir,
                mode,
            },
        )?;
        report.render(&mut TerminalOutput::quiet(quiet));

        Ok(())
    }
}
