//! Generator abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for output generators
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview
//! - [`write_previews`] - Write collected previews to disk

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, write_previews};
