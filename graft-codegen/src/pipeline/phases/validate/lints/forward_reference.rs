//! Lint for references to structs declared later in the file.

use std::collections::HashMap;

use graft_source::SourceFile;
use indexmap::IndexSet;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when a struct uses a struct declared after it.
///
/// Declarations are emitted in file order, so such a field names a type
/// that is still incomplete at its point of use in the generated header.
pub struct ForwardReferenceLint;

impl Lint for ForwardReferenceLint {
    fn name(&self) -> &'static str {
        "forward-reference"
    }

    fn check(&self, source: &SourceFile, diagnostics: &mut Vec<Diagnostic>) {
        let mut position = HashMap::new();
        for (index, decl) in source.structs.iter().enumerate() {
            position.entry(decl.name.as_str()).or_insert(index);
        }

        for (index, decl) in source.structs.iter().enumerate() {
            let mut reported = IndexSet::new();

            for field in decl.fields.iter().filter(|f| !f.embedded) {
                field.ty.for_each_named(&mut |name| {
                    let later = position.get(name).is_some_and(|&p| p > index);
                    if later && name != decl.name && reported.insert(name) {
                        diagnostics.push(
                            Diagnostic::warning(
                                self.name(),
                                format!(
                                    "struct '{}' references '{}', which is declared later",
                                    decl.name, name
                                ),
                            )
                            .at(format!("{}.{}", decl.name, field.name)),
                        );
                    }
                });
            }
        }
    }
}
