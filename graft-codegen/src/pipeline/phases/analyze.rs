//! Analyze phase - computes shared data from the source file.

use eyre::Result;

use crate::{
    ComputedData,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that computes [`ComputedData`] and reports type names that will be
/// passed through to the output unchanged.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let computed = ComputedData::from_source(&ctx.source);

        for (name, location) in &computed.unresolved {
            ctx.report(
                Diagnostic::info(
                    self.name(),
                    format!(
                        "type '{}' is not declared in this file; passed through verbatim",
                        name
                    ),
                )
                .at(location),
            );
        }

        ctx.computed = Some(computed);
        Ok(())
    }
}
