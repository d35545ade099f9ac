//! Archive extraction
//!
//! Prepares the per-document working area: copies the document under its
//! save root, reinterprets it as a ZIP archive, and extracts every member
//! into a temporary subtree for the collector to pick over.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::ZipArchive;

use super::error::{ItemizerError, Result};
use super::models::{DocumentFormat, DocumentRecord};

/// Suffix appended to the document stem to name its working directory.
const WORKING_DIR_SUFFIX: &str = " Information";

/// Name of the transient extraction subtree inside the working directory.
pub const TEMP_DIR_NAME: &str = "temp";

/// Set up the working area for `document_path` and extract its members.
///
/// Idempotent on the working directory: if `<save_root>/<stem> Information`
/// already exists the extraction is skipped entirely and the existing temp
/// subtree is reused, even if the source document has changed since.
///
/// A working directory created by this call is removed again if extraction
/// fails partway, so a failed document never leaves a half-built permanent
/// directory behind.
pub fn prepare(document_path: &Path, save_root: &Path) -> Result<DocumentRecord> {
    let format = DocumentFormat::from_path(document_path)?;
    let stem = document_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");

    let working_dir = save_root.join(format!("{stem}{WORKING_DIR_SUFFIX}"));
    let temp_dir = working_dir.join(TEMP_DIR_NAME);

    if !working_dir.is_dir() {
        if let Err(err) = extract_into(document_path, stem, &working_dir, &temp_dir) {
            let _ = fs::remove_dir_all(&working_dir);
            return Err(err);
        }
    }

    Ok(DocumentRecord {
        source: document_path.to_path_buf(),
        format,
        working_dir,
        temp_dir,
    })
}

/// Copy the document into a fresh working directory as `<stem>.zip` and
/// unpack every archive member below `temp_dir`.
fn extract_into(
    document_path: &Path,
    stem: &str,
    working_dir: &Path,
    temp_dir: &Path,
) -> Result<()> {
    fs::create_dir_all(working_dir).map_err(|source| ItemizerError::io(working_dir, source))?;

    let archive_copy = working_dir.join(format!("{stem}.zip"));
    fs::copy(document_path, &archive_copy)
        .map_err(|source| ItemizerError::io(document_path, source))?;

    let file =
        File::open(&archive_copy).map_err(|source| ItemizerError::io(&archive_copy, source))?;
    let mut archive = ZipArchive::new(file).map_err(|source| ItemizerError::InvalidArchive {
        path: document_path.to_path_buf(),
        source,
    })?;

    for index in 0..archive.len() {
        let mut member =
            archive
                .by_index(index)
                .map_err(|source| ItemizerError::InvalidArchive {
                    path: document_path.to_path_buf(),
                    source,
                })?;

        // Member names are untrusted; reject anything that would land
        // outside the temp subtree.
        let relative = member
            .enclosed_name()
            .ok_or_else(|| ItemizerError::UnsafeMemberPath {
                name: member.name().to_string(),
            })?;
        let target = temp_dir.join(relative);

        if member.is_dir() {
            fs::create_dir_all(&target).map_err(|source| ItemizerError::io(&target, source))?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| ItemizerError::io(parent, source))?;
        }
        let mut out =
            File::create(&target).map_err(|source| ItemizerError::io(&target, source))?;
        io::copy(&mut member, &mut out).map_err(|source| ItemizerError::io(&target, source))?;
    }

    Ok(())
}
