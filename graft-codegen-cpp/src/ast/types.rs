//! Target type descriptors.

/// The shape of a C++ type, without qualifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A builtin or standard library scalar (`int32_t`, `std::string`, `void`).
    Primitive(&'static str),
    /// `std::optional<T>`
    Optional(Box<TargetType>),
    /// `std::vector<T>`
    Sequence(Box<TargetType>),
    /// `std::unordered_map<K, V>`
    Associative(Box<TargetType>, Box<TargetType>),
    /// A name passed through unchanged: another struct or an external type.
    Named(String),
}

/// A C++ type with its qualifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetType {
    pub kind: TypeKind,
    pub is_const: bool,
    pub is_reference: bool,
    pub is_pointer: bool,
}

impl TargetType {
    fn of(kind: TypeKind) -> Self {
        Self {
            kind,
            is_const: false,
            is_reference: false,
            is_pointer: false,
        }
    }

    pub fn primitive(name: &'static str) -> Self {
        Self::of(TypeKind::Primitive(name))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::of(TypeKind::Named(name.into()))
    }

    pub fn optional(inner: TargetType) -> Self {
        Self::of(TypeKind::Optional(Box::new(inner)))
    }

    pub fn sequence(inner: TargetType) -> Self {
        Self::of(TypeKind::Sequence(Box::new(inner)))
    }

    pub fn associative(key: TargetType, value: TargetType) -> Self {
        Self::of(TypeKind::Associative(Box::new(key), Box::new(value)))
    }

    pub fn void() -> Self {
        Self::primitive("void")
    }

    /// The same type as a const reference, for accessor signatures.
    pub fn const_ref(mut self) -> Self {
        self.is_const = true;
        self.is_reference = true;
        self
    }

    /// The type's spelling without template arguments or qualifiers.
    pub fn base_name(&self) -> &str {
        match &self.kind {
            TypeKind::Primitive(name) => *name,
            TypeKind::Named(name) => name.as_str(),
            TypeKind::Optional(_) => "std::optional",
            TypeKind::Sequence(_) => "std::vector",
            TypeKind::Associative(..) => "std::unordered_map",
        }
    }

    /// Template arguments, in order; empty for non-container types.
    pub fn template_args(&self) -> Vec<&TargetType> {
        match &self.kind {
            TypeKind::Primitive(_) | TypeKind::Named(_) => Vec::new(),
            TypeKind::Optional(inner) | TypeKind::Sequence(inner) => vec![inner.as_ref()],
            TypeKind::Associative(key, value) => vec![key.as_ref(), value.as_ref()],
        }
    }

    /// Nesting depth of the type (`int32_t` is 1, `std::vector<std::optional<int32_t>>` is 3).
    pub fn depth(&self) -> usize {
        1 + self
            .template_args()
            .iter()
            .map(|arg| arg.depth())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_ref_keeps_kind() {
        let ty = TargetType::sequence(TargetType::primitive("std::string")).const_ref();
        assert!(ty.is_const);
        assert!(ty.is_reference);
        assert!(!ty.is_pointer);
        assert_eq!(ty.base_name(), "std::vector");
        assert_eq!(
            ty.template_args(),
            vec![&TargetType::primitive("std::string")]
        );
    }

    #[test]
    fn test_depth() {
        let ty = TargetType::associative(
            TargetType::primitive("std::string"),
            TargetType::sequence(TargetType::optional(TargetType::primitive("int32_t"))),
        );
        assert_eq!(ty.depth(), 4);
        assert_eq!(TargetType::named("Address").depth(), 1);
    }
}
