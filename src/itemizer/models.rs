//! Core data structures for document itemization
//!
//! This module defines the types shared across the engine: document formats,
//! component categories, path specifiers, per-document records, the per-run
//! request, and the accumulated run summary.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::error::ItemizerError;

/// Supported Office Open XML document families
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, clap::ValueEnum,
)]
pub enum DocumentFormat {
    /// Word documents (.docx)
    #[value(name = "docx")]
    Word,
    /// Excel workbooks (.xlsx)
    #[value(name = "xlsx")]
    Spreadsheet,
    /// PowerPoint presentations (.pptx)
    #[value(name = "pptx")]
    Presentation,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 3] = [
        DocumentFormat::Word,
        DocumentFormat::Spreadsheet,
        DocumentFormat::Presentation,
    ];

    /// Infer the format from a document's file extension.
    pub fn from_path(path: &Path) -> Result<Self, ItemizerError> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        match extension {
            "docx" => Ok(DocumentFormat::Word),
            "xlsx" => Ok(DocumentFormat::Spreadsheet),
            "pptx" => Ok(DocumentFormat::Presentation),
            other => Err(ItemizerError::UnknownFormat {
                extension: other.to_string(),
            }),
        }
    }

    /// File extension for this format, without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Word => "docx",
            DocumentFormat::Spreadsheet => "xlsx",
            DocumentFormat::Presentation => "pptx",
        }
    }
}

/// The four semantic buckets members are sorted into
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, clap::ValueEnum,
)]
pub enum ComponentCategory {
    /// Structural and metadata XML (document body, properties, relationships)
    #[value(name = "xml")]
    StructuralXml,
    /// Style sheet members
    #[value(name = "style")]
    Style,
    /// Embedded media members
    #[value(name = "image")]
    Image,
    /// Primary content members (document body, workbook, slides)
    #[value(name = "content")]
    Content,
}

impl ComponentCategory {
    pub const ALL: [ComponentCategory; 4] = [
        ComponentCategory::StructuralXml,
        ComponentCategory::Style,
        ComponentCategory::Image,
        ComponentCategory::Content,
    ];

    /// Name of the permanent per-category output directory
    pub fn dir_name(self) -> &'static str {
        match self {
            ComponentCategory::StructuralXml => "StructuralXML",
            ComponentCategory::Style => "Style",
            ComponentCategory::Image => "Image",
            ComponentCategory::Content => "Content",
        }
    }

    /// Whether subtree hits are limited to `.xml` members.
    /// Image subtrees collect every member regardless of extension.
    pub fn xml_only(self) -> bool {
        !matches!(self, ComponentCategory::Image)
    }
}

/// A single archive-relative component location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSpec {
    /// One specific member file, collected if present
    SingleFile(&'static str),
    /// Every matching member beneath a directory prefix
    Subtree(&'static str),
}

impl PathSpec {
    pub fn path(self) -> &'static str {
        match self {
            PathSpec::SingleFile(path) | PathSpec::Subtree(path) => path,
        }
    }
}

/// One discovered document and its per-document output locations
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    /// Path the document was discovered at
    pub source: PathBuf,
    pub format: DocumentFormat,
    /// Permanent output root: `<save_root>/<stem> Information`
    pub working_dir: PathBuf,
    /// Transient extraction subtree: `<working_dir>/temp`
    pub temp_dir: PathBuf,
}

/// Where one category's members ended up
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOutput {
    /// Permanent per-category directory
    pub dir: PathBuf,
    /// Member files copied (or previously copied) into `dir`
    pub files: Vec<PathBuf>,
    /// True when a completed collection was found and nothing was re-copied
    pub reused: bool,
}

/// Everything collected for one document, plus its non-fatal failures
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectedComponents {
    pub categories: BTreeMap<ComponentCategory, CategoryOutput>,
    /// Collection failures recorded while processing continued
    pub failures: Vec<String>,
}

/// Immutable description of one itemization run.
///
/// Constructed fresh per run and passed by reference through discovery,
/// extraction, and collection; never mutated in place.
#[derive(Debug, Clone)]
pub struct ItemizeRequest {
    /// File or directory to search for documents
    pub search_root: PathBuf,
    /// Descend into subdirectories of the search root
    pub recursive: bool,
    /// Document families to pick up
    pub formats: Vec<DocumentFormat>,
    /// Component categories to itemize
    pub categories: Vec<ComponentCategory>,
    /// Directory receiving the per-document output directories
    pub save_root: PathBuf,
    /// Retain the temporary extraction subtree after collection
    pub keep_excess: bool,
}

/// Result of processing a single document
#[derive(Debug, Serialize)]
pub struct DocumentOutcome {
    pub source: PathBuf,
    /// Collected components, when processing completed
    pub components: Option<CollectedComponents>,
    /// Rendered cause, when the document failed before collection
    pub error: Option<String>,
}

impl DocumentOutcome {
    pub fn success(source: PathBuf, components: CollectedComponents) -> Self {
        DocumentOutcome {
            source,
            components: Some(components),
            error: None,
        }
    }

    pub fn failure(source: PathBuf, error: &ItemizerError) -> Self {
        DocumentOutcome {
            source,
            components: None,
            error: Some(error.to_string()),
        }
    }
}

/// Accumulated per-document outcomes for one run.
/// One entry per discovered document; a failed document never unwinds its siblings.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub outcomes: Vec<DocumentOutcome>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_none()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}
