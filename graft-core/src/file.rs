use std::{fs, path::Path};

use eyre::{Context, Result};

/// Outcome of [`write_if_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file already held exactly this content and was not touched.
    Unchanged,
}

/// Write `content` to `path`, creating missing parent directories.
///
/// An existing file with identical content is left alone, so its
/// modification time only moves when the generated text changes.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteResult> {
    if fs::read(path).is_ok_and(|existing| existing == content.as_bytes()) {
        return Ok(WriteResult::Unchanged);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;

    Ok(WriteResult::Written)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("include").join("models").join("person.h");

        assert_eq!(
            write_if_changed(&path, "#pragma once\n").unwrap(),
            WriteResult::Written
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "#pragma once\n");
    }

    #[test]
    fn test_rewrites_changed_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("person.h");
        fs::write(&path, "struct Old {};\n").unwrap();

        assert_eq!(
            write_if_changed(&path, "struct Person {};\n").unwrap(),
            WriteResult::Written
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "struct Person {};\n");
    }

    #[test]
    fn test_identical_content_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("person.h");
        fs::write(&path, "same\n").unwrap();

        assert_eq!(
            write_if_changed(&path, "same\n").unwrap(),
            WriteResult::Unchanged
        );
    }

    #[test]
    fn test_unwritable_target_reports_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("taken");
        fs::write(&blocker, "").unwrap();

        let err = write_if_changed(&blocker.join("person.h"), "x").unwrap_err();
        assert!(err.to_string().contains("taken"));
    }
}
