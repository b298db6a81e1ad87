//! Built-in lints for source validation.

mod duplicate_struct;
mod empty_struct;
mod forward_reference;
mod reserved_word;

pub use duplicate_struct::DuplicateStructLint;
pub use empty_struct::EmptyStructLint;
pub use forward_reference::ForwardReferenceLint;
pub use reserved_word::{CPP_KEYWORDS, ReservedWordLint, is_cpp_keyword};
