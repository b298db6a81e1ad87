use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::decl::Span;

/// Result type for reader operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A syntax error found by the lexer or parser, before source context is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SyntaxError {
    pub message: String,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(graft::io), help("pass '-' to read Go source from stdin"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error: {message}")]
    #[diagnostic(code(graft::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },
}

impl Error {
    pub(crate) fn parse(err: SyntaxError, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span: err.span.into(),
            message: err.message,
        })
    }

    /// The parser's diagnostic message, if this is a parse error.
    pub fn parse_message(&self) -> Option<&str> {
        match self {
            Error::Parse { message, .. } => Some(message),
            Error::Io { .. } => None,
        }
    }

    /// Byte offset of the offending token, if this is a parse error.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Parse { span, .. } => Some(span.offset()),
            Error::Io { .. } => None,
        }
    }
}
