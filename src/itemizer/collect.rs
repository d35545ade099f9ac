//! Component classification and copy
//!
//! Walks the declared archive paths for each requested category, copies the
//! matching members into permanent per-category directories, and cleans up
//! the temporary extraction subtree unless the caller retains it. Failures
//! here are recorded per category and never abort the remaining work.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::error::ItemizerError;
use super::formats::component_paths;
use super::models::{
    CategoryOutput, CollectedComponents, ComponentCategory, DocumentRecord, PathSpec,
};
use super::xml::reformat_xml_file;

/// Manifest written into a category directory after a completed collection.
/// Its presence is what marks the category as done on a later run, so a
/// directory left behind by an unrelated process is still re-collected.
const MANIFEST_NAME: &str = ".collected.json";

/// Sort the extracted members of `record` into the requested categories.
///
/// Each category's output directory is `<working_dir>/<CategoryName>`. A
/// category whose manifest already exists is reused as-is. With
/// `keep_excess` false the temp subtree is deleted afterwards; the working
/// directory and the category directories are never touched by cleanup.
pub fn collect(
    record: &DocumentRecord,
    categories: &[ComponentCategory],
    keep_excess: bool,
) -> CollectedComponents {
    let mut collected = CollectedComponents::default();

    for &category in categories {
        let output = collect_category(record, category, &mut collected.failures);
        collected.categories.insert(category, output);
    }

    if !keep_excess && record.temp_dir.exists() {
        if let Err(source) = fs::remove_dir_all(&record.temp_dir) {
            collected
                .failures
                .push(ItemizerError::io(&record.temp_dir, source).to_string());
        }
    }

    collected
}

fn collect_category(
    record: &DocumentRecord,
    category: ComponentCategory,
    failures: &mut Vec<String>,
) -> CategoryOutput {
    let dir = record.working_dir.join(category.dir_name());
    let manifest = dir.join(MANIFEST_NAME);

    // A manifest marks the category as already collected on a prior run.
    if let Some(files) = read_manifest(&manifest) {
        return CategoryOutput {
            files: files.iter().map(|name| dir.join(name)).collect(),
            dir,
            reused: true,
        };
    }

    let hits = resolve_hits(record, category, failures);

    let mut copied: Vec<PathBuf> = Vec::new();
    if let Err(source) = fs::create_dir_all(&dir) {
        failures.push(ItemizerError::io(&dir, source).to_string());
        return CategoryOutput {
            dir,
            files: copied,
            reused: false,
        };
    }

    for hit in &hits {
        let Some(name) = hit.file_name() else {
            continue;
        };
        // Base-name collisions across source subdirectories overwrite
        // silently; Office member names are namespaced by their part.
        let dest = dir.join(name);
        match fs::copy(hit, &dest) {
            Ok(_) => {
                if !copied.contains(&dest) {
                    copied.push(dest);
                }
            }
            Err(source) => failures.push(ItemizerError::io(hit, source).to_string()),
        }
    }

    write_manifest(&manifest, &copied, failures);

    CategoryOutput {
        dir,
        files: copied,
        reused: false,
    }
}

/// Resolve the category's path specifiers against the temp subtree.
///
/// Single files are direct hits when present. Subtrees are walked
/// recursively; XML-bearing categories keep only `.xml` members and
/// reformat each one in place before it is copied, while the image
/// category keeps every member. A missing declared path is recorded and
/// skipped.
fn resolve_hits(
    record: &DocumentRecord,
    category: ComponentCategory,
    failures: &mut Vec<String>,
) -> Vec<PathBuf> {
    let mut hits = Vec::new();

    for &spec in component_paths(record.format, category) {
        let base = record.temp_dir.join(spec.path());
        match spec {
            PathSpec::SingleFile(_) => {
                if base.is_file() {
                    hits.push(base);
                } else {
                    failures.push(ItemizerError::MissingComponent { path: base }.to_string());
                }
            }
            PathSpec::Subtree(_) => {
                if !base.is_dir() {
                    failures.push(ItemizerError::MissingComponent { path: base }.to_string());
                    continue;
                }
                for entry in WalkDir::new(&base) {
                    let entry = match entry {
                        Ok(entry) => entry,
                        Err(err) => {
                            failures.push(err.to_string());
                            continue;
                        }
                    };
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let path = entry.path();
                    if category.xml_only() {
                        if path.extension().and_then(|ext| ext.to_str()) != Some("xml") {
                            continue;
                        }
                        // A member that fails reformatting is still copied,
                        // just left in its original single-line form.
                        if let Err(err) = reformat_xml_file(path) {
                            failures.push(err.to_string());
                        }
                    }
                    hits.push(path.to_path_buf());
                }
            }
        }
    }

    hits
}

fn read_manifest(manifest: &Path) -> Option<Vec<String>> {
    let bytes = fs::read(manifest).ok()?;
    serde_json::from_slice(&bytes).ok()
}

fn write_manifest(manifest: &Path, copied: &[PathBuf], failures: &mut Vec<String>) {
    let names: Vec<&str> = copied
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .collect();

    let result = serde_json::to_vec_pretty(&names)
        .map_err(|err| err.to_string())
        .and_then(|bytes| fs::write(manifest, bytes).map_err(|err| err.to_string()));
    if let Err(detail) = result {
        failures.push(format!("failed to write `{}`: {detail}", manifest.display()));
    }
}
