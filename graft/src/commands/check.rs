use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Go source files, `-` for stdin (defaults to `inputs` in graft.toml)
    pub inputs: Vec<PathBuf>,

    /// Path to graft.toml (defaults to ./graft.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    pub fn run(&self, quiet: bool) -> Result<()> {
        let project = Project::load(self.config.as_deref()).unwrap_or_exit();
        let inputs = project.inputs(&self.inputs)?;
        let units = ops::read_sources(&inputs).unwrap_or_exit();

        let report = ops::check(units, project.name())?;
        report.render(&mut TerminalOutput::quiet(quiet));

        Ok(())
    }
}
