use super::{Method, TargetType};

/// A data member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TargetType,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TargetType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A struct definition.
///
/// Field and method order is emission order. The constructor is kept apart
/// from `methods` so it is always emitted ahead of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    pub name: String,
    pub fields: Vec<Field>,
    pub constructor: Option<Method>,
    pub methods: Vec<Method>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            constructor: None,
            methods: Vec::new(),
        }
    }

    /// Methods in emission order, constructor first.
    pub fn all_methods(&self) -> impl Iterator<Item = &Method> {
        self.constructor.iter().chain(self.methods.iter())
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.all_methods().find(|m| m.name == name)
    }
}
