//! Office document itemization engine
//!
//! This module provides the core pipeline: discovering Office Open XML
//! documents, extracting their ZIP containers into a per-document working
//! area, and sorting the extracted members into semantic component
//! categories.

pub mod collect;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod formats;
pub mod models;
pub mod runner;
pub(crate) mod xml;

// Re-export the engine surface
pub use collect::collect;
pub use discovery::discover;
pub use error::ItemizerError;
pub use extract::prepare;
pub use formats::component_paths;
pub use models::*;
pub use runner::run;
