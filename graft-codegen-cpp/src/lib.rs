//! C++ header generation for graft.
//!
//! Go struct declarations are lowered into a small C++ AST
//! ([`TranslationUnit`]) by the [`Transformer`], with field types resolved by
//! the [`CppTypeMapper`], and serialized by the emitter.
//!
//! ```
//! let source = graft_source::parse_str("package geo\n\ntype Point struct {\n\tX, Y float64\n}\n").unwrap();
//! let header = graft_codegen_cpp::emit(&graft_codegen_cpp::transform_source(&source));
//!
//! assert!(header.starts_with("#pragma once\n"));
//! assert!(header.contains("    const double& get_X() const { return X; }\n"));
//! ```

mod emitter;
mod generator;
mod transformer;
mod type_mapper;

pub mod ast;

pub use ast::{
    Expr, Field, Include, Method, Node, Param, Stmt, Struct, TargetType, TranslationUnit, TypeKind,
};
pub use emitter::{Emitter, emit, render_type};
pub use generator::Generator;
pub use graft_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use transformer::{STANDARD_INCLUDES, Transformer, transform_source};
pub use type_mapper::{CppTypeMapper, Hoister};
