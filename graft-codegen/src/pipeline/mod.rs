//! Compilation pipeline run over a parsed source file.
//!
//! The [`Pipeline`] runs the validate and analyze phases, then any phases
//! added by the caller, collecting [`Diagnostic`]s into a shared
//! [`CompilationContext`]. Generators are then built from the context.
//!
//! # Example
//!
//! ```
//! use graft_codegen::pipeline::{Pipeline, Severity};
//!
//! let source = graft_source::parse_str("package main\n\ntype Empty struct{}\n").unwrap();
//! let ctx = Pipeline::new().run(source).unwrap();
//!
//! assert!(ctx.computed.is_some());
//! assert!(ctx.diagnostics.iter().any(|d| d.severity == Severity::Info));
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
