//! Structural JSON document model.
//!
//! Generic names (`Vec`, `Map`, `Option`) are the exporter's own vocabulary,
//! unrelated to the C++ target types.

use graft_source::{RawField, RawType, SourceFile, StructDecl};
use serde::Serialize;

/// Language tag written into every exported module.
pub const SOURCE_LANGUAGE: &str = "go";

/// Root of the exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Module", rename_all = "camelCase")]
pub struct Module {
    pub source_language: String,
    pub items: Vec<Item>,
}

impl Module {
    pub fn from_source(source: &SourceFile) -> Self {
        Self {
            source_language: SOURCE_LANGUAGE.to_string(),
            items: source.structs.iter().map(Item::from_decl).collect(),
        }
    }
}

/// A top-level struct declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Struct")]
pub struct Item {
    pub name: String,
    pub fields: Vec<FieldDesc>,
}

impl Item {
    pub fn from_decl(decl: &StructDecl) -> Self {
        Self {
            name: decl.name.clone(),
            fields: decl.fields.iter().map(FieldDesc::from_raw).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDesc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDesc,
}

impl FieldDesc {
    /// Embedded fields keep the type's name as their field name.
    pub fn from_raw(field: &RawField) -> Self {
        Self {
            name: field.name.clone(),
            ty: TypeDesc::from_raw(&field.ty),
        }
    }
}

/// Type descriptor, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeDesc {
    Primitive {
        name: String,
    },
    Struct {
        anonymous: bool,
        fields: Vec<FieldDesc>,
    },
    Generic {
        name: GenericName,
        args: Vec<TypeDesc>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenericName {
    Vec,
    Map,
    Option,
}

impl TypeDesc {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive { name: name.into() }
    }

    pub fn generic(name: GenericName, args: Vec<TypeDesc>) -> Self {
        Self::Generic { name, args }
    }

    /// Qualified and unmodelled types come through as `primitive` with their
    /// source spelling.
    pub fn from_raw(ty: &RawType) -> Self {
        match ty {
            RawType::Named(name) => Self::primitive(name.as_str()),
            RawType::Pointer(inner) => {
                Self::generic(GenericName::Option, vec![Self::from_raw(inner)])
            }
            RawType::Slice(elem) => Self::generic(GenericName::Vec, vec![Self::from_raw(elem)]),
            RawType::Map(key, value) => Self::generic(
                GenericName::Map,
                vec![Self::from_raw(key), Self::from_raw(value)],
            ),
            RawType::Composite(fields) => Self::Struct {
                anonymous: true,
                fields: fields.iter().map(FieldDesc::from_raw).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn to_value(ty: &RawType) -> serde_json::Value {
        serde_json::to_value(TypeDesc::from_raw(ty)).expect("serialize")
    }

    #[test]
    fn test_primitive() {
        assert_eq!(
            to_value(&RawType::named("time.Time")),
            json!({"kind": "primitive", "name": "time.Time"})
        );
    }

    #[test]
    fn test_nested_generics() {
        let ty = RawType::map(
            RawType::named("string"),
            RawType::slice(RawType::pointer(RawType::named("int"))),
        );

        assert_eq!(
            to_value(&ty),
            json!({
                "kind": "generic",
                "name": "Map",
                "args": [
                    {"kind": "primitive", "name": "string"},
                    {
                        "kind": "generic",
                        "name": "Vec",
                        "args": [{
                            "kind": "generic",
                            "name": "Option",
                            "args": [{"kind": "primitive", "name": "int"}]
                        }]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_anonymous_struct() {
        let ty = RawType::Composite(vec![RawField::new("City", RawType::named("string"))]);

        assert_eq!(
            to_value(&ty),
            json!({
                "kind": "struct",
                "anonymous": true,
                "fields": [{"name": "City", "type": {"kind": "primitive", "name": "string"}}]
            })
        );
    }

    #[test]
    fn test_module_tags() {
        let source = SourceFile {
            package: "main".to_string(),
            structs: vec![StructDecl::new("Empty", vec![])],
        };

        assert_eq!(
            serde_json::to_value(Module::from_source(&source)).expect("serialize"),
            json!({
                "type": "Module",
                "sourceLanguage": "go",
                "items": [{"type": "Struct", "name": "Empty", "fields": []}]
            })
        );
    }
}
