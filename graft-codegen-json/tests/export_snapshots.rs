//! Snapshot tests for the structural JSON export.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::Path;

use graft_codegen_json::{Generator, LanguageCodegen};

const ORDER: &str = r#"
package shop

import "time"

type Base struct {
	ID int64
}

type Order struct {
	Base
	Placed time.Time
	Note   *string
	Lines  []struct {
		SKU string
		Qty int
	}
	Totals   map[string]float64
	Sum, Tax float64 `json:"sum"`
}
"#;

fn export(src: &str, input: &str) -> (String, String) {
    let source = graft_source::parse_str(src).expect("Failed to parse source");
    let generator = Generator::new(&source, Path::new(input));
    let mut files = generator.preview();

    assert_eq!(files.len(), 1);
    let file = files.remove(0);
    (file.path, file.content)
}

#[test]
fn test_order_module() {
    let (path, document) = export(ORDER, "order.go");
    assert_eq!(path, "order.json");
    insta::assert_snapshot!("order_module", document);
}

#[test]
fn test_empty_module() {
    let (_, document) = export("package empty\n\nfunc main() {}\n", "empty.go");
    insta::assert_snapshot!("empty_module", document);
}

#[test]
fn test_document_is_valid_json() {
    let (_, document) = export(ORDER, "order.go");
    let value: serde_json::Value = serde_json::from_str(&document).expect("valid JSON");

    assert_eq!(value["items"][1]["name"], "Order");
    assert_eq!(value["items"][1]["fields"].as_array().map(Vec::len), Some(7));
    assert_eq!(value["items"][1]["fields"][0]["name"], "Base");
    assert_eq!(value["items"][1]["fields"][3]["type"]["args"][0]["anonymous"], true);
}

#[test]
fn test_stdin_uses_package_name() {
    let (path, _) = export(ORDER, "-");
    assert_eq!(path, "shop.json");
}

#[test]
fn test_generate_writes_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = graft_source::parse_str(ORDER).expect("Failed to parse source");
    let generator = Generator::new(&source, Path::new("order.go"));

    let result = generator.generate(dir.path()).expect("generate");
    assert_eq!(result.written.len(), 1);

    let written = std::fs::read_to_string(dir.path().join("order.json")).expect("read");
    assert!(written.ends_with("}\n"));
    assert!(written.contains("\"sourceLanguage\": \"go\""));

    let again = generator.generate(dir.path()).expect("generate");
    assert_eq!(again.unchanged.len(), 1);
}
