//! Validate phase - runs lints on the source file.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{
    CPP_KEYWORDS, DuplicateStructLint, EmptyStructLint, ForwardReferenceLint, ReservedWordLint,
    is_cpp_keyword,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the source file using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateStructLint),
                Box::new(ReservedWordLint),
                Box::new(ForwardReferenceLint),
                Box::new(EmptyStructLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Names of the lints, in run order.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.source, &mut ctx.diagnostics);
        }

        if let Some(first) = ctx.errors().next() {
            bail!(
                "Validation failed with {} error(s); first: {}",
                ctx.errors().count(),
                first
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use graft_source::SourceFile;

    use super::*;
    use crate::pipeline::Diagnostic;

    fn parse(src: &str) -> SourceFile {
        graft_source::parse_str(src).expect("valid test source")
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            vec![
                "duplicate-struct",
                "reserved-word",
                "forward-reference",
                "empty-struct"
            ]
        );
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn check(&self, _source: &SourceFile, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error(self.name(), "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(SourceFile::default());

        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);
        let result = phase.run(&mut ctx);

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed with 1 error(s); first: error[always-error]: forced error"
        );
    }

    #[test]
    fn test_warnings_allowed() {
        let mut ctx = CompilationContext::new(parse(
            "package main\ntype A struct{ X int }\ntype A struct{ Y int }\n",
        ));

        let result = ValidatePhase::new().run(&mut ctx);

        assert!(result.is_ok());
        assert_eq!(ctx.warnings().count(), 1);
        assert!(!ctx.has_errors());
    }
}
