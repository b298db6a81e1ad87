//! Pipeline orchestrator.

use eyre::Result;
use graft_source::SourceFile;

use super::{
    CompilationContext, Phase,
    phases::{AnalyzePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, analyze) followed by any user phases.
/// Each run owns its context; a pipeline can be reused across source files.
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
        }
    }

    /// Replace the built-in validate phase (e.g. to change the lint set).
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Phase names in execution order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        let builtins: [&dyn Phase; 2] = [&self.validate, &AnalyzePhase];
        builtins
            .into_iter()
            .chain(self.phases.iter().map(|p| p.as_ref()))
            .map(|p| p.name())
            .collect()
    }

    /// Run the pipeline on a parsed source file.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally, including a lint
    /// reporting an error.
    pub fn run(&self, source: SourceFile) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(source);

        self.validate.run(&mut ctx)?;
        AnalyzePhase.run(&mut ctx)?;
        for phase in &self.phases {
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
