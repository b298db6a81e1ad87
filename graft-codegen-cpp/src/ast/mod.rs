//! C++ target AST.
//!
//! A closed set of node kinds covering what the generated headers contain:
//! a translation unit of includes and structs, fields, methods with their
//! parameters, types, and the statement/expression subset used by accessor
//! bodies. Nodes are built once by the transformer and never mutated;
//! [`Node`] gives a read-only, top-down view for passes over the tree.

mod methods;
mod node;
mod structs;
mod types;
mod unit;

pub use methods::{Expr, Method, Param, Stmt};
pub use node::Node;
pub use structs::{Field, Struct};
pub use types::{TargetType, TypeKind};
pub use unit::{Include, TranslationUnit};
