//! Error types for structure retrieval.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RetrievalError>;

/// Everything that can stop a structure from reaching its target path.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The identifier was empty
    #[error("Structure identifier must not be empty")]
    EmptyIdentifier,

    /// The source cannot serve this format
    #[error("Unsupported archive format: {0}")]
    UnsupportedFormat(String),

    /// The identifier cannot be mapped to an archive path
    #[error("Structure {0} has no location in the archive")]
    NotInArchive(String),

    /// The archive answered with a non-success status
    #[error("Structure {identifier} not found at {url}: HTTP {status}")]
    UnknownStructure {
        /// Requested identifier
        identifier: String,
        /// URL that was requested
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The archive entry is not valid gzip
    #[error("Failed to decompress {url}: {source}")]
    Decompress {
        /// URL the entry was downloaded from
        url: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The downloaded file to rename does not exist
    #[error("No such file: {}", .0.display())]
    MissingFile(PathBuf),

    /// Any other filesystem failure
    #[error("IO error at {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl RetrievalError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RetrievalError::Io {
            path: path.into(),
            source,
        }
    }
}
