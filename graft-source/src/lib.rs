//! Go source reader for graft.
//!
//! Turns Go source text into a generic declaration tree: every top-level
//! struct-typed `type` declaration becomes a [`StructDecl`] holding its fields
//! and their raw type expressions ([`RawType`]). Everything else in the file
//! (functions, variables, interfaces, aliases) is parsed far enough to be
//! skipped and then ignored.
//!
//! # Example
//!
//! ```
//! let file = graft_source::parse_str(
//!     "package main\n\ntype Point struct {\n\tX, Y float64\n}\n",
//! )
//! .unwrap();
//!
//! assert_eq!(file.structs.len(), 1);
//! assert_eq!(file.structs[0].fields.len(), 2);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod builtins;
mod decl;
mod error;
mod lexer;
mod parser;

use std::path::Path;

pub use builtins::{BUILTIN_TYPES, is_builtin_type};
pub use decl::{RawField, RawType, SourceFile, Span, StructDecl};
pub use error::{Error, Result};

/// Parse Go source text, using `filename` in error reports.
///
/// A syntactically valid file without struct declarations yields an empty
/// [`SourceFile::structs`], not an error.
pub fn parse_source(src: &str, filename: &str) -> Result<SourceFile> {
    parser::parse(src).map_err(|e| Error::parse(e, src, filename))
}

/// Parse Go source text that has no file name (e.g. read from stdin).
pub fn parse_str(src: &str) -> Result<SourceFile> {
    parse_source(src, "<stdin>")
}

/// Read and parse a Go source file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<SourceFile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse_source(&content, &path.display().to_string())
}

/// Read Go source from stdin until EOF and parse it.
pub fn parse_stdin() -> Result<SourceFile> {
    let content = std::io::read_to_string(std::io::stdin()).map_err(|e| {
        Box::new(Error::Io {
            path: "-".into(),
            source: e,
        })
    })?;
    parse_str(&content)
}
