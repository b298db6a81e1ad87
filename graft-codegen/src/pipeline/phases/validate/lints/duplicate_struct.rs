//! Lint for duplicate struct declarations.

use std::collections::HashSet;

use graft_source::SourceFile;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when a struct name is declared more than once.
pub struct DuplicateStructLint;

impl Lint for DuplicateStructLint {
    fn name(&self) -> &'static str {
        "duplicate-struct"
    }

    fn check(&self, source: &SourceFile, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();

        for decl in &source.structs {
            if !seen.insert(decl.name.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(self.name(), format!("duplicate struct '{}'", decl.name))
                        .at(&decl.name),
                );
            }
        }
    }
}
