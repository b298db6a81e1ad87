use std::path::Path;

use graft_codegen::language::{LanguageCodegen, PreviewFile};
use graft_core::output_file_name;
use graft_source::SourceFile;

use crate::{ast::TranslationUnit, emit, transform_source};

/// C++ header generator: one `<stem>.h` per source file.
pub struct Generator<'a> {
    source: &'a SourceFile,
    file_name: String,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn file_extension(&self) -> &'static str {
        "h"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: self.file_name.clone(),
            content: self.render(),
        }]
    }
}

impl<'a> Generator<'a> {
    /// `input` names the output file; stdin (`-`) falls back to the package name.
    pub fn new(source: &'a SourceFile, input: &Path) -> Self {
        Self {
            source,
            file_name: output_file_name(input, &source.package, "h"),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn unit(&self) -> TranslationUnit {
        transform_source(self.source)
    }

    /// The header text.
    pub fn render(&self) -> String {
        emit(&self.unit())
    }
}
