//! Generic declaration tree produced by the reader.

use miette::SourceSpan;

/// Byte range of a construct in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// A Go type expression, exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawType {
    /// An identifier or qualified identifier (`int64`, `Address`, `time.Time`).
    ///
    /// Type expressions graft does not model (`chan T`, `func(...)`,
    /// `interface{...}`, generic instantiations) are carried here verbatim.
    Named(String),
    /// `*T`
    Pointer(Box<RawType>),
    /// `[]T`, and fixed arrays `[N]T`
    Slice(Box<RawType>),
    /// `map[K]V`
    Map(Box<RawType>, Box<RawType>),
    /// An anonymous `struct { ... }`
    Composite(Vec<RawField>),
}

impl RawType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn pointer(inner: RawType) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn slice(inner: RawType) -> Self {
        Self::Slice(Box::new(inner))
    }

    pub fn map(key: RawType, value: RawType) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Call `f` for every named type referenced by this expression,
    /// including those inside anonymous structs.
    pub fn for_each_named<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            RawType::Named(name) => f(name),
            RawType::Pointer(inner) | RawType::Slice(inner) => inner.for_each_named(f),
            RawType::Map(key, value) => {
                key.for_each_named(f);
                value.for_each_named(f);
            }
            RawType::Composite(fields) => {
                for field in fields {
                    field.ty.for_each_named(f);
                }
            }
        }
    }

    /// Nesting depth of the expression (`int` is 1, `[]*int` is 3).
    pub fn depth(&self) -> usize {
        match self {
            RawType::Named(_) | RawType::Composite(_) => 1,
            RawType::Pointer(inner) | RawType::Slice(inner) => 1 + inner.depth(),
            RawType::Map(key, value) => 1 + key.depth().max(value.depth()),
        }
    }
}

/// One named field of a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub name: String,
    pub ty: RawType,
    /// Embedded fields (`Base`, `*pkg.Base`) are named after their type.
    pub embedded: bool,
    /// The raw struct tag including its quotes, if any.
    pub tag: Option<String>,
    pub span: Span,
}

impl RawField {
    pub fn new(name: impl Into<String>, ty: RawType) -> Self {
        Self {
            name: name.into(),
            ty,
            embedded: false,
            tag: None,
            span: Span::default(),
        }
    }
}

/// A top-level struct-typed `type` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<RawField>,
    /// Span of the declared name.
    pub span: Span,
}

impl StructDecl {
    pub fn new(name: impl Into<String>, fields: Vec<RawField>) -> Self {
        Self {
            name: name.into(),
            fields,
            span: Span::default(),
        }
    }
}

/// Everything the reader extracted from one source unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceFile {
    pub package: String,
    /// Struct declarations in file order.
    pub structs: Vec<StructDecl>,
}

impl SourceFile {
    /// Look up a declared struct by name.
    pub fn find(&self, name: &str) -> Option<&StructDecl> {
        self.structs.iter().find(|s| s.name == name)
    }
}
