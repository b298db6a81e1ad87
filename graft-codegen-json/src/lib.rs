//! Structural JSON export for graft.
//!
//! Serializes the declaration tree as a `Module` document whose fields carry
//! `primitive`, `struct` or `generic` type descriptors.

mod descriptor;
mod generator;

pub use descriptor::{FieldDesc, GenericName, Item, Module, SOURCE_LANGUAGE, TypeDesc};
pub use generator::Generator;
pub use graft_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
