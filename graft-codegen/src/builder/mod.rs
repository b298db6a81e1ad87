//! Indentation-aware text buffer used by the emitters.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
