//! Document discovery
//!
//! Walks a search root and returns the Office documents matching the
//! requested formats. A root that names a single file is matched directly
//! without any directory walk.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{ItemizerError, Result};
use super::models::DocumentFormat;

/// Find documents of the requested formats under `root`.
///
/// Non-recursive means the first level of the walk only: the root itself is
/// still visited and its direct entries are considered, but subdirectories
/// are not descended into. An empty result is not an error; an unreadable
/// root is fatal to the run.
pub fn discover(
    root: &Path,
    recursive: bool,
    formats: &[DocumentFormat],
) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        let matches = DocumentFormat::from_path(root)
            .map(|format| formats.contains(&format))
            .unwrap_or(false);
        return Ok(if matches {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut documents = Vec::new();
    for entry in WalkDir::new(root).max_depth(max_depth) {
        let entry = entry.map_err(|source| ItemizerError::Discovery {
            path: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(format) = DocumentFormat::from_path(entry.path()) {
            if formats.contains(&format) {
                documents.push(entry.path().to_path_buf());
            }
        }
    }

    // Walk order is platform-dependent; keep runs deterministic.
    documents.sort();
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"stub").expect("failed to write test file");
    }

    #[test]
    fn single_matching_file_is_returned_without_a_walk() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let doc = dir.path().join("report.docx");
        touch(&doc);

        let found = discover(&doc, false, &[DocumentFormat::Word]).expect("discovery failed");
        assert_eq!(found, vec![doc]);
    }

    #[test]
    fn single_non_matching_file_yields_empty() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let doc = dir.path().join("report.docx");
        touch(&doc);

        let found =
            discover(&doc, false, &[DocumentFormat::Spreadsheet]).expect("discovery failed");
        assert!(found.is_empty(), "xlsx search should not match a docx file");

        let note = dir.path().join("notes.txt");
        touch(&note);
        let found = discover(&note, false, &DocumentFormat::ALL).expect("discovery failed");
        assert!(found.is_empty(), "unsupported extensions never match");
    }

    #[test]
    fn non_recursive_walk_stops_at_the_first_level() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let top = dir.path().join("top.docx");
        touch(&top);
        let nested_dir = dir.path().join("nested");
        fs::create_dir(&nested_dir).expect("failed to create subdir");
        touch(&nested_dir.join("deep.docx"));

        let found =
            discover(dir.path(), false, &[DocumentFormat::Word]).expect("discovery failed");
        assert_eq!(found, vec![top], "only depth-0 matches expected");
    }

    #[test]
    fn recursive_walk_descends_into_subdirectories() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        touch(&dir.path().join("top.docx"));
        let nested_dir = dir.path().join("nested");
        fs::create_dir(&nested_dir).expect("failed to create subdir");
        touch(&nested_dir.join("deep.xlsx"));

        let found = discover(dir.path(), true, &DocumentFormat::ALL).expect("discovery failed");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn empty_directory_yields_empty_not_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let found = discover(dir.path(), true, &DocumentFormat::ALL).expect("discovery failed");
        assert!(found.is_empty());
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("nowhere");
        let err = discover(&missing, true, &DocumentFormat::ALL).unwrap_err();
        assert!(matches!(err, ItemizerError::Discovery { .. }));
    }
}
