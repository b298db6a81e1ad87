//! Shared code generation utilities for graft.
//!
//! This crate provides the target-independent pieces used by the output
//! generators (`graft-codegen-cpp`, `graft-codegen-json`).
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text buffer (CodeBuilder, Indent)
//! - [`language`] - Generator abstractions (LanguageCodegen, PreviewFile)
//! - [`pipeline`] - Validate and analyze phases run over a parsed source file

pub mod builder;
mod computed;
pub mod language;
pub mod pipeline;

pub use computed::ComputedData;
