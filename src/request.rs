use crate::error::{Result, RetrievalError};
use std::path::{Path, PathBuf};

/// Trimming threshold used when `--idscore` is not given.
pub const DEFAULT_IDENTITY_THRESHOLD: f64 = 0.7;

/// A single structure download, built once from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct RetrievalRequest {
    identifier: String,
    output_directory: PathBuf,
    identity_threshold: f64,
}

impl RetrievalRequest {
    /// Build a request, lower-casing the identifier.
    ///
    /// # Arguments
    ///
    /// * `identifier` - PDB identifier, case-insensitive
    /// * `output_directory` - Destination directory, created on fetch if missing
    /// * `identity_threshold` - Sequence identity threshold, [`DEFAULT_IDENTITY_THRESHOLD`] if `None`
    ///
    /// # Errors
    ///
    /// [`RetrievalError::EmptyIdentifier`] if `identifier` is empty.
    pub fn new(
        identifier: &str,
        output_directory: impl AsRef<Path>,
        identity_threshold: Option<f64>,
    ) -> Result<Self> {
        if identifier.is_empty() {
            return Err(RetrievalError::EmptyIdentifier);
        }
        Ok(Self {
            identifier: identifier.to_lowercase(),
            output_directory: output_directory.as_ref().to_path_buf(),
            identity_threshold: identity_threshold.unwrap_or(DEFAULT_IDENTITY_THRESHOLD),
        })
    }

    /// Make the output directory absolute against the current directory.
    ///
    /// The directory does not need to exist.
    pub fn resolve(self) -> Result<Self> {
        let output_directory = std::path::absolute(&self.output_directory)
            .map_err(|e| RetrievalError::io(&self.output_directory, e))?;
        Ok(Self {
            output_directory,
            ..self
        })
    }

    /// Lower-cased PDB identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Directory the structure is written to.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Accepted from the command line but not used for retrieval.
    pub fn identity_threshold(&self) -> f64 {
        self.identity_threshold
    }
}
