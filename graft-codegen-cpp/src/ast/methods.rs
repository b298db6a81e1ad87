use super::TargetType;

/// An expression. Accessor bodies only ever name identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }
}

/// A statement in a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `return <expr>;`
    Return(Expr),
    /// `<lhs> = <rhs>;`
    Assign { lhs: Expr, rhs: Expr },
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: TargetType,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TargetType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A member function. A method without a return type is a constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub return_type: Option<TargetType>,
    pub params: Vec<Param>,
    pub is_const: bool,
    pub body: Vec<Stmt>,
}

impl Method {
    /// `Name() = default;`
    pub fn default_constructor(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            params: Vec::new(),
            is_const: false,
            body: Vec::new(),
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }

    /// A constructor with nothing to do, emitted as `= default`.
    pub fn is_defaulted(&self) -> bool {
        self.is_constructor() && self.params.is_empty() && self.body.is_empty()
    }
}
