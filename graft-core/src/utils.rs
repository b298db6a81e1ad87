//! Shared utility functions for code generation.

use std::path::Path;

/// Convert a string to PascalCase (e.g., "home_address" -> "HomeAddress").
///
/// Characters after the first of each `_`-separated part are kept as-is, so
/// already-exported Go names (`HomeAddress`) pass through unchanged.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Derive the generated file name for an input path (e.g., "models/person.go" -> "person.h").
///
/// Inputs without a usable stem (stdin is `-`) fall back to `fallback`.
pub fn output_file_name(input: &Path, fallback: &str, extension: &str) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty() && *s != "-")
        .unwrap_or(fallback);
    format!("{}.{}", stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("address"), "Address");
        assert_eq!(to_pascal_case("home_address"), "HomeAddress");
        assert_eq!(to_pascal_case("HomeAddress"), "HomeAddress");
        assert_eq!(to_pascal_case("iD"), "ID");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(Path::new("models/person.go"), "out", "h"),
            "person.h"
        );
        assert_eq!(
            output_file_name(Path::new("person.go"), "out", "json"),
            "person.json"
        );
        assert_eq!(output_file_name(Path::new("-"), "stdin", "h"), "stdin.h");
    }
}
