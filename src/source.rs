//! Remote sources of structure files.
//!
//! A [`StructureSource`] writes the file for one identifier into a directory
//! and reports where it put it. [`WwpdbSource`] reads from the gzipped flat
//! files of the wwPDB divided archive.

use crate::error::{Result, RetrievalError};
use crate::settings::{Settings, ARCHIVE_FORMAT};
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Something that can place a structure file on disk.
pub trait StructureSource {
    /// Write the structure `identifier` in `format` into `destination`.
    ///
    /// Returns the path of the written file.
    fn retrieve(&self, identifier: &str, format: &str, destination: &Path) -> Result<PathBuf>;
}

/// Blocking HTTP client for the wwPDB divided archive.
pub struct WwpdbSource {
    client: reqwest::blocking::Client,
    server: String,
    legacy_extension: String,
}

impl WwpdbSource {
    /// Build a client for the archive root in `settings`.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            server: settings.server.clone(),
            legacy_extension: settings.legacy_extension.clone(),
        })
    }

    /// Location of the gzipped flat file, e.g. `{server}/pdb/hh/pdb4hhb.ent.gz`.
    ///
    /// The archive groups entries by the two middle characters of the identifier,
    /// so identifiers shorter than three characters have no location.
    pub fn archive_url(&self, identifier: &str) -> Option<String> {
        let middle = identifier.get(1..3)?;
        Some(format!(
            "{}/pdb/{middle}/pdb{identifier}.ent.gz",
            self.server
        ))
    }
}

impl StructureSource for WwpdbSource {
    fn retrieve(&self, identifier: &str, format: &str, destination: &Path) -> Result<PathBuf> {
        if format != ARCHIVE_FORMAT {
            return Err(RetrievalError::UnsupportedFormat(format.to_string()));
        }
        let url = self
            .archive_url(identifier)
            .ok_or_else(|| RetrievalError::NotInArchive(identifier.to_string()))?;
        debug!("Downloading {identifier} from {url}");

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(RetrievalError::UnknownStructure {
                identifier: identifier.to_string(),
                url,
                status: response.status().as_u16(),
            });
        }
        let compressed = response.bytes()?;

        // Decompress before touching the filesystem so a bad archive leaves nothing behind
        let mut payload = Vec::new();
        GzDecoder::new(compressed.as_ref())
            .read_to_end(&mut payload)
            .map_err(|source| RetrievalError::Decompress { url, source })?;

        let file_path = destination.join(format!("{identifier}.{}", self.legacy_extension));

        std::fs::create_dir_all(destination).map_err(|e| RetrievalError::io(destination, e))?;
        std::fs::write(&file_path, &payload).map_err(|e| RetrievalError::io(&file_path, e))?;
        debug!("Wrote {} bytes to {}", payload.len(), file_path.display());

        Ok(file_path)
    }
}
