//! Retrieval settings.

/// Root of the wwPDB divided archive
pub const WWPDB_SERVER: &str = "https://files.wwpdb.org/pub/pdb/data/structures/divided";
/// Format tag of the historical PDB flat file
pub const ARCHIVE_FORMAT: &str = "pdb";
/// Suffix the archive uses for PDB flat files
pub const LEGACY_EXTENSION: &str = "ent";
/// Suffix of the final output file
pub const TARGET_EXTENSION: &str = "pdb";

/// Where structures come from and how they are named on disk.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Base URL of the divided archive
    pub server: String,
    /// Format tag passed to the structure source
    pub format: String,
    /// Extension of the file written by the source
    pub legacy_extension: String,
    /// Extension the file is renamed to
    pub target_extension: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: WWPDB_SERVER.to_string(),
            format: ARCHIVE_FORMAT.to_string(),
            legacy_extension: LEGACY_EXTENSION.to_string(),
            target_extension: TARGET_EXTENSION.to_string(),
        }
    }
}

impl Settings {
    /// Use a different archive root, e.g. a local mirror.
    pub fn with_server(mut self, server: &str) -> Self {
        self.server = server.trim_end_matches('/').to_string();
        self
    }
}
