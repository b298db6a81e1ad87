//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from checking one or more inputs.
#[derive(Debug)]
pub struct CheckReport {
    pub project: Option<String>,
    pub files: Vec<FileCheck>,
}

/// Diagnostics and struct summary for a single input.
#[derive(Debug)]
pub struct FileCheck {
    pub input: PathBuf,
    pub package: String,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    /// Anonymous struct types nested in field declarations.
    pub anonymous_structs: usize,
    /// Structs of the translated unit, in emission order.
    pub structs: Vec<StructSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructSummary {
    pub name: String,
    pub field_count: usize,
    /// Lifted out of an anonymous struct rather than declared.
    pub hoisted: bool,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(name) = &self.project {
            out.key_value("Project", name);
            out.newline();
        }

        for (i, file) in self.files.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            file.render(out);
        }
    }
}

impl FileCheck {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.diagnostic(&format!("warning: {}", warning));
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }
        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        out.preformatted(&format!(
            "✓ {} is valid (package {})",
            self.input.display(),
            self.package
        ));

        let count = self.structs.len();
        let mut heading = format!("  {} struct{}", count, if count == 1 { "" } else { "s" });
        if self.anonymous_structs > 0 {
            heading.push_str(&format!(", {} hoisted", self.anonymous_structs));
        }
        out.section(&heading);
        for summary in &self.structs {
            out.list_item(&summary.to_string());
        }
    }
}

impl std::fmt::Display for StructSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} field{}",
            self.name,
            self.field_count,
            if self.field_count == 1 { "" } else { "s" }
        )?;
        if self.hoisted {
            write!(f, ", hoisted")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::Recorder;

    #[test]
    fn test_struct_summary_display() {
        let summary = StructSummary {
            name: "PersonAddress".to_string(),
            field_count: 1,
            hoisted: true,
        };
        assert_eq!(summary.to_string(), "PersonAddress (1 field, hoisted)");
    }

    #[test]
    fn test_render() {
        let report = CheckReport {
            project: None,
            files: vec![FileCheck {
                input: PathBuf::from("person.go"),
                package: "main".to_string(),
                warnings: vec![],
                infos: vec!["type 'time.Time' is not declared in this file; passed through verbatim".to_string()],
                anonymous_structs: 0,
                structs: vec![StructSummary {
                    name: "Person".to_string(),
                    field_count: 2,
                    hoisted: false,
                }],
            }],
        };

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            "info: type 'time.Time' is not declared in this file; passed through verbatim\n\
             \n\
             ✓ person.go is valid (package main)\n  \
             1 struct:\n  \
             - Person (2 fields)\n"
        );
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_render_hoisted_count() {
        let report = CheckReport {
            project: Some("models".to_string()),
            files: vec![FileCheck {
                input: PathBuf::from("person.go"),
                package: "main".to_string(),
                warnings: vec!["struct name 'class' is a C++ keyword".to_string()],
                infos: vec![],
                anonymous_structs: 1,
                structs: vec![
                    StructSummary {
                        name: "PersonAddress".to_string(),
                        field_count: 1,
                        hoisted: true,
                    },
                    StructSummary {
                        name: "Person".to_string(),
                        field_count: 2,
                        hoisted: false,
                    },
                ],
            }],
        };

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            "Project: models\n\
             \n\
             \n\
             ✓ person.go is valid (package main)\n  \
             2 structs, 1 hoisted:\n  \
             - PersonAddress (1 field, hoisted)\n  \
             - Person (2 fields)\n"
        );
        assert_eq!(out.stderr, "warning: struct name 'class' is a C++ keyword\n");
    }
}
