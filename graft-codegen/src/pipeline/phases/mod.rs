//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the source file
//! - [`AnalyzePhase`] - computes shared data from the source file

mod analyze;
mod validate;

pub use analyze::AnalyzePhase;
pub use validate::{
    CPP_KEYWORDS, DuplicateStructLint, EmptyStructLint, ForwardReferenceLint, Lint,
    ReservedWordLint, ValidatePhase, is_cpp_keyword,
};
