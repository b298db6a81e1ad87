//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A step run over every source file.
///
/// Problems the user can act on are reported as diagnostics on the context;
/// returning `Err` aborts the run for that file.
pub trait Phase: Send + Sync {
    /// Short name, also used as the code of diagnostics the phase raises.
    fn name(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
