//! Go to C++ type mapping.

use std::sync::LazyLock;

use graft_source::{RawField, RawType};
use indexmap::IndexMap;

use crate::ast::TargetType;

/// Go builtin scalar types and their C++ spelling.
static TYPE_TABLE: LazyLock<IndexMap<&'static str, &'static str>> = LazyLock::new(|| {
    IndexMap::from([
        ("int", "int32_t"),
        ("int8", "int8_t"),
        ("int16", "int16_t"),
        ("int32", "int32_t"),
        ("int64", "int64_t"),
        ("uint", "uint32_t"),
        ("uint8", "uint8_t"),
        ("uint16", "uint16_t"),
        ("uint32", "uint32_t"),
        ("uint64", "uint64_t"),
        ("uintptr", "uintptr_t"),
        ("float32", "float"),
        ("float64", "double"),
        ("string", "std::string"),
        ("bool", "bool"),
        ("byte", "uint8_t"),
        ("rune", "int32_t"),
    ])
});

/// Receives anonymous structs found while mapping and names them.
///
/// The mapper only produces a reference to the returned name; registering
/// the struct itself is up to the hoister.
pub trait Hoister {
    fn hoist(&mut self, fields: &[RawField]) -> String;
}

impl<F> Hoister for F
where
    F: FnMut(&[RawField]) -> String,
{
    fn hoist(&mut self, fields: &[RawField]) -> String {
        self(fields)
    }
}

/// Maps Go type expressions to C++ target types.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppTypeMapper;

impl CppTypeMapper {
    /// The scalar lookup table, in declaration order.
    pub fn table() -> &'static IndexMap<&'static str, &'static str> {
        &TYPE_TABLE
    }

    /// Map a type expression, innermost first.
    ///
    /// Names missing from the table are passed through as
    /// [`TypeKind::Named`](crate::ast::TypeKind::Named). Stored field types
    /// carry no qualifiers; see [`TargetType::const_ref`] for accessor
    /// positions.
    pub fn map(&self, raw: &RawType, hoister: &mut impl Hoister) -> TargetType {
        match raw {
            RawType::Named(name) => match TYPE_TABLE.get(name.as_str()) {
                Some(cpp) => TargetType::primitive(*cpp),
                None => TargetType::named(name),
            },
            RawType::Pointer(inner) => TargetType::optional(self.map(inner, hoister)),
            RawType::Slice(inner) => TargetType::sequence(self.map(inner, hoister)),
            RawType::Map(key, value) => {
                let key = self.map(key, hoister);
                TargetType::associative(key, self.map(value, hoister))
            }
            RawType::Composite(fields) => TargetType::named(hoister.hoist(fields)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TypeKind;

    fn map(raw: &RawType) -> TargetType {
        CppTypeMapper.map(raw, &mut |_: &[RawField]| -> String {
            panic!("unexpected anonymous struct")
        })
    }

    #[test]
    fn test_primitives() {
        assert_eq!(
            map(&RawType::named("int")),
            TargetType::primitive("int32_t")
        );
        assert_eq!(
            map(&RawType::named("uint64")),
            TargetType::primitive("uint64_t")
        );
        assert_eq!(
            map(&RawType::named("float64")),
            TargetType::primitive("double")
        );
        assert_eq!(
            map(&RawType::named("string")),
            TargetType::primitive("std::string")
        );
        assert_eq!(
            map(&RawType::named("byte")),
            TargetType::primitive("uint8_t")
        );
        assert_eq!(CppTypeMapper::table().len(), 17);
    }

    #[test]
    fn test_pointer_to_primitive_is_optional() {
        assert_eq!(
            map(&RawType::pointer(RawType::named("string"))),
            TargetType::optional(TargetType::primitive("std::string"))
        );
    }

    #[test]
    fn test_slice_of_pointer() {
        assert_eq!(
            map(&RawType::slice(RawType::pointer(RawType::named("Address")))),
            TargetType::sequence(TargetType::optional(TargetType::named("Address")))
        );
    }

    #[test]
    fn test_depth_is_preserved() {
        let raw = RawType::map(
            RawType::named("string"),
            RawType::slice(RawType::pointer(RawType::named("int"))),
        );
        let mapped = map(&raw);

        assert_eq!(
            mapped,
            TargetType::associative(
                TargetType::primitive("std::string"),
                TargetType::sequence(TargetType::optional(TargetType::primitive("int32_t"))),
            )
        );
        assert_eq!(mapped.depth(), raw.depth());
    }

    #[test]
    fn test_unknown_names_pass_through() {
        let first = map(&RawType::named("Address"));
        let second = map(&RawType::named("Address"));
        assert_eq!(first, second);
        assert_eq!(first.kind, TypeKind::Named("Address".to_string()));

        assert_eq!(
            map(&RawType::named("time.Time")),
            TargetType::named("time.Time")
        );
    }

    #[test]
    fn test_stored_types_are_unqualified() {
        let mapped = map(&RawType::pointer(RawType::named("int")));
        assert!(!mapped.is_const);
        assert!(!mapped.is_reference);
        assert!(!mapped.is_pointer);
    }

    #[test]
    fn test_composite_is_hoisted() {
        let mut seen = Vec::new();
        let raw = RawType::slice(RawType::Composite(vec![RawField::new(
            "City",
            RawType::named("string"),
        )]));

        let mapped = CppTypeMapper.map(&raw, &mut |fields: &[RawField]| {
            seen.push(fields.len());
            "PersonAddress".to_string()
        });

        assert_eq!(
            mapped,
            TargetType::sequence(TargetType::named("PersonAddress"))
        );
        assert_eq!(seen, vec![1]);
    }
}
