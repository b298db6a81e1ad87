//! State carried through one pipeline run.

use graft_source::SourceFile;

use super::diagnostic::{Diagnostic, Severity};
use crate::ComputedData;

/// One source file on its way through the pipeline.
///
/// `computed` is filled in by the analyze phase; diagnostics accumulate in
/// the order lints and phases raise them.
#[derive(Debug)]
pub struct CompilationContext {
    pub source: SourceFile,
    pub computed: Option<ComputedData>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(source: SourceFile) -> Self {
        Self {
            source,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Info)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_clean() {
        let ctx = CompilationContext::new(SourceFile::default());
        assert!(ctx.computed.is_none());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_filters_by_severity() {
        let mut ctx = CompilationContext::new(SourceFile::default());
        ctx.report(Diagnostic::warning("duplicate-struct", "duplicate struct 'A'").at("A"));
        ctx.report(Diagnostic::info("empty-struct", "struct 'B' has no fields").at("B"));
        ctx.report(Diagnostic::warning("reserved-word", "struct name 'new' is a C++ keyword"));

        assert!(!ctx.has_errors());
        let codes: Vec<_> = ctx.warnings().map(|d| d.code).collect();
        assert_eq!(codes, vec!["duplicate-struct", "reserved-word"]);
        assert_eq!(ctx.infos().count(), 1);

        ctx.report(Diagnostic::error("validate", "forced"));
        assert!(ctx.has_errors());
        assert_eq!(ctx.errors().count(), 1);
    }
}
