//! Lint for structs without fields.

use graft_source::SourceFile;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that notes structs declared without fields.
pub struct EmptyStructLint;

impl Lint for EmptyStructLint {
    fn name(&self) -> &'static str {
        "empty-struct"
    }

    fn check(&self, source: &SourceFile, diagnostics: &mut Vec<Diagnostic>) {
        for decl in source.structs.iter().filter(|s| s.fields.is_empty()) {
            diagnostics.push(
                Diagnostic::info(self.name(), format!("struct '{}' has no fields", decl.name))
                    .at(&decl.name),
            );
        }
    }
}
