use std::path::Path;

use graft_codegen::language::{LanguageCodegen, PreviewFile};
use graft_core::output_file_name;
use graft_source::SourceFile;

use crate::Module;

/// JSON exporter: one `<stem>.json` per source file.
pub struct Generator<'a> {
    source: &'a SourceFile,
    file_name: String,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "json"
    }

    fn file_extension(&self) -> &'static str {
        "json"
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
            file_name: output_file_name(input, &source.package, "json"),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn module(&self) -> Module {
        Module::from_source(self.source)
    }

    /// Pretty-printed document with a trailing newline.
    pub fn render(&self) -> String {
        let mut out = serde_json::to_string_pretty(&self.module())
            .expect("serialization cannot fail for a declaration tree");
        out.push('\n');
        out
    }
}
