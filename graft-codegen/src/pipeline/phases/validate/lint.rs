//! Lint trait for declaration checks.

use graft_source::SourceFile;

use crate::pipeline::Diagnostic;

/// A check over the parsed declarations.
///
/// Lints never fail; they only append diagnostics, coded with their
/// [`name`](Lint::name).
pub trait Lint: Send + Sync {
    /// Kebab-case name, e.g. `duplicate-struct`.
    fn name(&self) -> &'static str;

    fn check(&self, source: &SourceFile, diagnostics: &mut Vec<Diagnostic>);
}
