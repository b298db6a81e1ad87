//! Data computed once per source file and shared by generators.

use graft_source::{RawField, RawType, SourceFile, is_builtin_type};
use indexmap::{IndexMap, IndexSet};

/// Analysis results for one source file, populated by the analyze phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedData {
    /// Declared struct names, in file order, without duplicates.
    pub declared: IndexSet<String>,
    /// Referenced type names that are neither Go builtins nor declared in the
    /// file, mapped to the first `Struct.field` that uses them.
    pub unresolved: IndexMap<String, String>,
    /// Number of anonymous struct types nested anywhere in the file.
    pub anonymous_structs: usize,
}

impl ComputedData {
    pub fn from_source(source: &SourceFile) -> Self {
        let declared: IndexSet<String> = source.structs.iter().map(|s| s.name.clone()).collect();
        let mut unresolved = IndexMap::new();
        let mut anonymous_structs = 0;

        for decl in &source.structs {
            for field in &decl.fields {
                let location = format!("{}.{}", decl.name, field.name);
                field.ty.for_each_named(&mut |name| {
                    if !is_builtin_type(name) && !declared.contains(name) {
                        unresolved
                            .entry(name.to_string())
                            .or_insert_with(|| location.clone());
                    }
                });
                anonymous_structs += count_anonymous(field);
            }
        }

        Self {
            declared,
            unresolved,
            anonymous_structs,
        }
    }

    /// Whether `name` is declared as a struct in the analyzed file.
    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }
}

fn count_anonymous(field: &RawField) -> usize {
    fn walk(ty: &RawType) -> usize {
        match ty {
            RawType::Named(_) => 0,
            RawType::Pointer(inner) | RawType::Slice(inner) => walk(inner),
            RawType::Map(key, value) => walk(key) + walk(value),
            RawType::Composite(fields) => 1 + fields.iter().map(count_anonymous).sum::<usize>(),
        }
    }
    walk(&field.ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_and_unresolved() {
        let source = graft_source::parse_str(
            r#"
package main

type Person struct {
	Home    Address
	Born    time.Time
	Friends []*Person
	Extra   struct {
		Note  Memo
		Inner struct{ Since time.Time }
	}
}

type Address struct {
	City string
}
"#,
        )
        .unwrap();

        let computed = ComputedData::from_source(&source);

        assert_eq!(
            computed.declared.iter().collect::<Vec<_>>(),
            vec!["Person", "Address"]
        );
        assert!(computed.is_declared("Address"));
        assert_eq!(
            computed.unresolved.iter().collect::<Vec<_>>(),
            vec![
                (&"time.Time".to_string(), &"Person.Born".to_string()),
                (&"Memo".to_string(), &"Person.Extra".to_string()),
            ]
        );
        assert_eq!(computed.anonymous_structs, 2);
    }

    #[test]
    fn test_empty_source() {
        let computed = ComputedData::from_source(&SourceFile::default());
        assert_eq!(computed, ComputedData::default());
    }
}
