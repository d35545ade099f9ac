//! partx: Split Office Open XML documents into their component parts
//!
//! This library locates Word, Excel, and PowerPoint documents (which are ZIP
//! archives internally), unpacks them, and sorts their internal members into
//! four semantic buckets (structural XML, style sheets, images, and primary
//! content), writing each bucket to a predictable per-document output
//! directory.

pub mod itemizer;

// Re-export commonly used types
pub use itemizer::{
    collect, component_paths, discover, prepare, run, CategoryOutput, CollectedComponents,
    ComponentCategory, DocumentFormat, DocumentOutcome, DocumentRecord, ItemizeRequest,
    ItemizerError, PathSpec, RunSummary,
};
