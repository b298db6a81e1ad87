use indexmap::IndexSet;

use super::{Node, Struct, TypeKind};

/// An `#include` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    pub path: String,
    /// `<path>` when true, `"path"` otherwise.
    pub is_system: bool,
}

impl Include {
    pub fn system(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_system: true,
        }
    }

    pub fn local(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_system: false,
        }
    }
}

/// Everything generated from one source file: includes, then structs in
/// the order they were appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationUnit {
    pub includes: Vec<Include>,
    pub structs: Vec<Struct>,
}

impl TranslationUnit {
    pub fn find(&self, name: &str) -> Option<&Struct> {
        self.structs.iter().find(|s| s.name == name)
    }

    /// Names of `Named` types used anywhere in the unit, in first-use order.
    pub fn referenced_types(&self) -> IndexSet<String> {
        let mut names = IndexSet::new();
        Node::Unit(self).walk(&mut |node| {
            if let Node::Type(ty) = node
                && let TypeKind::Named(name) = &ty.kind
            {
                names.insert(name.clone());
            }
        });
        names
    }
}
