//! Snapshot tests for C++ header generation.
//!
//! These tests verify that the generated headers match expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::Path;

use graft_codegen_cpp::{Generator, LanguageCodegen, render_type};

const PERSON: &str = r#"
package main

type Person struct {
	ID    int64
	Name  string
	Email *string
	Tags  []string
	Meta  map[string]int
}
"#;

/// Generate the header for a source file and return its content.
fn generate(src: &str) -> String {
    let source = graft_source::parse_str(src).expect("Failed to parse source");
    let generator = Generator::new(&source, Path::new("model.go"));
    let mut files = generator.preview();

    assert_eq!(files.len(), 1);
    let file = files.remove(0);
    assert_eq!(file.path, "model.h");
    file.content
}

#[test]
fn test_person_header() {
    let header = generate(PERSON);
    insta::assert_snapshot!("person_header", header);
}

#[test]
fn test_person_structure() {
    let source = graft_source::parse_str(PERSON).unwrap();
    let unit = Generator::new(&source, Path::new("person.go")).unit();

    assert_eq!(unit.structs.len(), 1);
    let person = &unit.structs[0];

    let types: Vec<_> = person
        .fields
        .iter()
        .map(|f| (f.name.as_str(), render_type(&f.ty)))
        .collect();
    assert_eq!(
        types,
        vec![
            ("ID", "int64_t".to_string()),
            ("Name", "std::string".to_string()),
            ("Email", "std::optional<std::string>".to_string()),
            ("Tags", "std::vector<std::string>".to_string()),
            ("Meta", "std::unordered_map<std::string, int32_t>".to_string()),
        ]
    );

    assert_eq!(person.all_methods().count(), 11);
    for field in &person.fields {
        let getter = person.method(&format!("get_{}", field.name)).unwrap();
        assert!(getter.is_const);
        assert_eq!(
            render_type(getter.return_type.as_ref().unwrap()),
            format!("const {}&", render_type(&field.ty))
        );

        let setter = person.method(&format!("set_{}", field.name)).unwrap();
        assert_eq!(
            render_type(setter.return_type.as_ref().unwrap()),
            "void"
        );
        assert_eq!(setter.params.len(), 1);
        assert_eq!(setter.params[0].name, "val");
        assert_eq!(
            render_type(&setter.params[0].ty),
            format!("const {}&", render_type(&field.ty))
        );
    }
}

#[test]
fn test_hoisted_structs() {
    let header = generate(
        r#"
package shop

type Order struct {
	ID       uint64
	Shipping struct {
		Street string
		Geo    *struct {
			Lat, Lng float64
		}
	}
	Lines []struct {
		SKU   string
		Count uint16
	}
}
"#,
    );
    insta::assert_snapshot!("hoisted_structs", header);
}

#[test]
fn test_passthrough_types() {
    let header = generate(
        r#"
package events

import "time"

type Base struct {
	ID string
}

type Event struct {
	Base
	At      time.Time
	Payload []byte
	Digest  [32]byte
	Owner   *User
	Labels  map[string]*string
}
"#,
    );
    insta::assert_snapshot!("passthrough_types", header);
}

#[test]
fn test_no_structs() {
    let header = generate("package util\n\nfunc Helper() {}\n");
    insta::assert_snapshot!("no_structs", header);
}

#[test]
fn test_stdin_uses_package_name() {
    let source = graft_source::parse_str(PERSON).unwrap();
    let generator = Generator::new(&source, Path::new("-"));
    assert_eq!(generator.file_name(), "main.h");
}

#[test]
fn test_generate_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let source = graft_source::parse_str(PERSON).unwrap();
    let generator = Generator::new(&source, Path::new("models/person.go"));

    let result = generator.generate(dir.path()).unwrap();
    assert_eq!(result.written, vec![dir.path().join("person.h")]);

    let written = std::fs::read_to_string(dir.path().join("person.h")).unwrap();
    assert_eq!(written, generator.render());
}
