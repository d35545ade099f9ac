//! Error taxonomy for the itemization engine
//!
//! Discovery failures are fatal to a run. Extraction failures are fatal for
//! the affected document only. Collection failures are recorded per category
//! and never abort the remaining work.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ItemizerError>;

#[derive(Debug, thiserror::Error)]
pub enum ItemizerError {
    /// The file extension is outside the supported Office families.
    #[error("unsupported document extension `{extension}`")]
    UnknownFormat { extension: String },

    /// The document could not be opened as a ZIP container.
    #[error("`{path}` is not a valid Office archive: {source}")]
    InvalidArchive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    /// An archive member name would resolve outside the extraction directory.
    #[error("archive member `{name}` escapes the extraction directory")]
    UnsafeMemberPath { name: String },

    /// A component path declared for the format is absent from the extraction.
    #[error("declared component path `{path}` is missing")]
    MissingComponent { path: PathBuf },

    /// An XML member could not be rewritten in its indented form.
    #[error("failed to reformat `{path}`: {detail}")]
    Reformat { path: PathBuf, detail: String },

    /// The search root could not be walked.
    #[error("failed to search `{path}`: {source}")]
    Discovery {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Filesystem failure while preparing or collecting a document.
    #[error("`{path}`: {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl ItemizerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
