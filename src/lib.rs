#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # pdbfetch Library
//!
//! Download a structure from the wwPDB divided archive into a directory and
//! rename it from the archive's `.ent` suffix to `.pdb`.

mod error;
mod request;
mod retriever;
mod settings;
mod source;
#[cfg(test)]
mod test_utils;

// Re-export key public types
pub use error::{Result, RetrievalError};
pub use request::{RetrievalRequest, DEFAULT_IDENTITY_THRESHOLD};
pub use retriever::StructureRetriever;
pub use settings::{Settings, ARCHIVE_FORMAT, LEGACY_EXTENSION, TARGET_EXTENSION, WWPDB_SERVER};
pub use source::{StructureSource, WwpdbSource};

use std::path::PathBuf;

/// Download a structure and store it under its target name.
///
/// # Arguments
///
/// * `request` - Identifier and output directory
/// * `settings` - Archive location and file extensions
///
/// # Returns
///
/// The path of the renamed file, `<output_directory>/<identifier>.pdb` with default settings.
///
/// # Example
///
/// ```no_run
/// use pdbfetch::{retrieve_structure, RetrievalRequest, Settings};
///
/// let request = RetrievalRequest::new("4HHB", "/tmp/out", None).unwrap();
/// let path = retrieve_structure(&request, &Settings::default()).unwrap();
/// assert_eq!(path.to_str(), Some("/tmp/out/4hhb.pdb"));
/// ```
pub fn retrieve_structure(request: &RetrievalRequest, settings: &Settings) -> Result<PathBuf> {
    let source = WwpdbSource::new(settings)?;
    StructureRetriever::new(request.clone(), settings.clone(), source).run()
}
