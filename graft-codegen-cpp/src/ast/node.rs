//! Read-only traversal over the target AST.

use super::{Expr, Field, Include, Method, Param, Stmt, Struct, TargetType, TranslationUnit};

/// A borrowed reference to any AST node.
///
/// Passes over the tree match on `Node` exhaustively, so a new node kind
/// cannot be added without every pass handling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Unit(&'a TranslationUnit),
    Include(&'a Include),
    Struct(&'a Struct),
    Field(&'a Field),
    Method(&'a Method),
    Param(&'a Param),
    Type(&'a TargetType),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

impl<'a> Node<'a> {
    /// Direct children, in emission order.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Unit(unit) => unit
                .includes
                .iter()
                .map(Node::Include)
                .chain(unit.structs.iter().map(Node::Struct))
                .collect(),
            Node::Include(_) => Vec::new(),
            Node::Struct(s) => s
                .fields
                .iter()
                .map(Node::Field)
                .chain(s.all_methods().map(Node::Method))
                .collect(),
            Node::Field(field) => vec![Node::Type(&field.ty)],
            Node::Method(method) => method
                .return_type
                .iter()
                .map(Node::Type)
                .chain(method.params.iter().map(Node::Param))
                .chain(method.body.iter().map(Node::Stmt))
                .collect(),
            Node::Param(param) => vec![Node::Type(&param.ty)],
            Node::Type(ty) => ty.template_args().into_iter().map(Node::Type).collect(),
            Node::Stmt(Stmt::Return(expr)) => vec![Node::Expr(expr)],
            Node::Stmt(Stmt::Assign { lhs, rhs }) => vec![Node::Expr(lhs), Node::Expr(rhs)],
            Node::Expr(Expr::Ident(_)) => Vec::new(),
        }
    }

    /// Visit this node and all its descendants, pre-order.
    pub fn walk(&self, f: &mut impl FnMut(Node<'a>)) {
        f(*self);
        for child in self.children() {
            child.walk(f);
        }
    }
}
