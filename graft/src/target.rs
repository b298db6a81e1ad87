//! Unified target dispatch.
//!
//! Centralizes target-specific generator creation.

use std::path::Path;

use graft_codegen::language::LanguageCodegen;
use graft_codegen_cpp::Generator as CppGenerator;
use graft_codegen_json::Generator as JsonGenerator;
use graft_manifest::Target;
use graft_source::SourceFile;

/// Generator factory for one output format.
#[derive(Debug, Clone, Copy)]
pub struct TargetSupport {
    target: Target,
}

impl TargetSupport {
    pub fn get(target: Target) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Create the generator for one parsed input.
    pub fn generator<'a>(
        &self,
        source: &'a SourceFile,
        input: &Path,
    ) -> Box<dyn LanguageCodegen + 'a> {
        match self.target {
            Target::Cpp => Box::new(CppGenerator::new(source, input)),
            Target::Json => Box::new(JsonGenerator::new(source, input)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_per_target() {
        let source = graft_source::parse_str("package main\n\ntype A struct{ X int }\n")
            .expect("valid source");

        let cpp = TargetSupport::get(Target::Cpp);
        let generator = cpp.generator(&source, Path::new("a.go"));
        assert_eq!(generator.language(), "cpp");
        assert_eq!(generator.preview()[0].path, "a.h");

        let json = TargetSupport::get(Target::Json);
        let generator = json.generator(&source, Path::new("a.go"));
        assert_eq!(generator.language(), "json");
        assert_eq!(generator.preview()[0].path, "a.json");
    }
}
