//! Check operation - parse and validate inputs without generating.

use eyre::{Context, Result};
use graft_codegen::{ComputedData, pipeline::Pipeline};
use graft_codegen_cpp::transform_source;

use super::{located, project::SourceUnit};
use crate::reports::{CheckReport, FileCheck, StructSummary};

/// Execute the check operation.
///
/// Runs the pipeline on every input and summarizes the structs the C++
/// translation would contain.
pub fn check(units: Vec<SourceUnit>, project: Option<&str>) -> Result<CheckReport> {
    let pipeline = Pipeline::new();
    let mut files = Vec::with_capacity(units.len());

    for unit in units {
        let ctx = pipeline
            .run(unit.source)
            .wrap_err_with(|| format!("Validation failed for '{}'", unit.input.display()))?;

        let warnings = ctx.warnings().map(|d| located(&unit.input, d)).collect();
        let infos = ctx.infos().map(|d| located(&unit.input, d)).collect();

        let computed = ctx
            .computed
            .clone()
            .unwrap_or_else(|| ComputedData::from_source(&ctx.source));
        let structs = transform_source(&ctx.source)
            .structs
            .iter()
            .map(|s| StructSummary {
                name: s.name.clone(),
                field_count: s.fields.len(),
                hoisted: !computed.is_declared(&s.name),
            })
            .collect();

        files.push(FileCheck {
            input: unit.input,
            package: ctx.source.package.clone(),
            warnings,
            infos,
            anonymous_structs: computed.anonymous_structs,
            structs,
        });
    }

    Ok(CheckReport {
        project: project.map(str::to_string),
        files,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn unit(name: &str, src: &str) -> SourceUnit {
        SourceUnit {
            input: PathBuf::from(name),
            source: graft_source::parse_str(src).expect("valid source"),
        }
    }

    #[test]
    fn test_check_summarizes_hoisted_structs() {
        let src = r#"
package main

import "time"

type Person struct {
	Name    string
	Born    time.Time
	Address struct {
		City string
	}
}
"#;

        let report = check(vec![unit("person.go", src)], Some("models")).unwrap();

        assert_eq!(report.project.as_deref(), Some("models"));
        let file = &report.files[0];
        assert_eq!(file.package, "main");
        assert!(file.warnings.is_empty());
        assert_eq!(file.infos.len(), 1);
        assert!(file.infos[0].contains("'time.Time'"));
        assert!(file.infos[0].ends_with("--> person.go (Person.Born)"));
        assert_eq!(file.anonymous_structs, 1);

        assert_eq!(
            file.structs,
            vec![
                StructSummary {
                    name: "PersonAddress".to_string(),
                    field_count: 1,
                    hoisted: true,
                },
                StructSummary {
                    name: "Person".to_string(),
                    field_count: 3,
                    hoisted: false,
                },
            ]
        );
    }

    #[test]
    fn test_check_collects_warnings_per_file() {
        let units = vec![
            unit("a.go", "package a\n\ntype class struct{ X int }\n"),
            unit("b.go", "package b\n\ntype Ok struct{ X int }\n"),
        ];

        let report = check(units, None).unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.files[0].warnings.len(), 1);
        assert!(report.files[0].warnings[0].contains("C++ keyword"));
        assert!(report.files[1].warnings.is_empty());
    }
}
