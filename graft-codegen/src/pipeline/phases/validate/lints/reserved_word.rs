//! Lint for names that are C++ keywords.

use graft_source::{RawField, RawType, SourceFile};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// C++20 keywords and alternative operator tokens.
pub const CPP_KEYWORDS: &[&str] = &[
    "alignas",
    "alignof",
    "and",
    "and_eq",
    "asm",
    "auto",
    "bitand",
    "bitor",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "char8_t",
    "char16_t",
    "char32_t",
    "class",
    "co_await",
    "co_return",
    "co_yield",
    "compl",
    "concept",
    "const",
    "const_cast",
    "consteval",
    "constexpr",
    "constinit",
    "continue",
    "decltype",
    "default",
    "delete",
    "do",
    "double",
    "dynamic_cast",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "mutable",
    "namespace",
    "new",
    "noexcept",
    "not",
    "not_eq",
    "nullptr",
    "operator",
    "or",
    "or_eq",
    "private",
    "protected",
    "public",
    "register",
    "reinterpret_cast",
    "requires",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_assert",
    "static_cast",
    "struct",
    "switch",
    "template",
    "this",
    "thread_local",
    "throw",
    "true",
    "try",
    "typedef",
    "typeid",
    "typename",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "wchar_t",
    "while",
    "xor",
    "xor_eq",
];

/// Check if a name is a C++ keyword.
pub fn is_cpp_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Lint that warns about struct and field names that are C++ keywords.
pub struct ReservedWordLint;

impl Lint for ReservedWordLint {
    fn name(&self) -> &'static str {
        "reserved-word"
    }

    fn check(&self, source: &SourceFile, diagnostics: &mut Vec<Diagnostic>) {
        for decl in &source.structs {
            if is_cpp_keyword(&decl.name) {
                diagnostics.push(keyword_warning("struct", &decl.name, &decl.name));
            }
            check_fields(&decl.name, &decl.fields, diagnostics);
        }
    }
}

fn check_fields(path: &str, fields: &[RawField], diagnostics: &mut Vec<Diagnostic>) {
    for field in fields.iter().filter(|f| !f.embedded) {
        let location = format!("{}.{}", path, field.name);
        if is_cpp_keyword(&field.name) {
            diagnostics.push(keyword_warning("field", &field.name, &location));
        }
        if let Some(nested) = composite_fields(&field.ty) {
            check_fields(&location, nested, diagnostics);
        }
    }
}

/// Fields of the anonymous struct inside `ty`, looking through containers.
fn composite_fields(ty: &RawType) -> Option<&[RawField]> {
    match ty {
        RawType::Composite(fields) => Some(fields),
        RawType::Pointer(inner) | RawType::Slice(inner) => composite_fields(inner),
        RawType::Map(_, value) => composite_fields(value),
        RawType::Named(_) => None,
    }
}

fn keyword_warning(kind: &str, name: &str, location: &str) -> Diagnostic {
    Diagnostic::warning(
        "reserved-word",
        format!("{} name '{}' is a C++ keyword", kind, name),
    )
    .at(location)
}
