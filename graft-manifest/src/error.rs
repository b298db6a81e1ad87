use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Manifest text being loaded, borrowed for the duration of one parse.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Document<'a> {
    pub text: &'a str,
    pub name: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str, name: &'a str) -> Self {
        Self { text, name }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name, self.text.to_string())
    }

    /// Wrap a TOML syntax or schema error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    /// Report an invalid value, pointing at `span` when it could be found.
    pub fn invalid(
        &self,
        message: impl Into<String>,
        help: Option<&str>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
            help: help.map(str::to_string),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(graft::manifest::io),
        help("check the --config path, or omit it to use built-in defaults")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid graft.toml")]
    #[diagnostic(code(graft::manifest::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("not valid here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(graft::manifest::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        message: String,
        #[help]
        help: Option<String>,
    },
}
