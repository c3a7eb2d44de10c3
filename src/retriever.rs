use crate::error::{Result, RetrievalError};
use crate::request::RetrievalRequest;
use crate::settings::Settings;
use crate::source::StructureSource;
use std::path::PathBuf;
use tracing::debug;

/// Downloads one structure and gives it its final name.
///
/// [`fetch`](Self::fetch) must run before [`rename`](Self::rename).
pub struct StructureRetriever<S: StructureSource> {
    request: RetrievalRequest,
    settings: Settings,
    source: S,
}

impl<S: StructureSource> StructureRetriever<S> {
    /// Combine a request with the settings and source that serve it.
    pub fn new(request: RetrievalRequest, settings: Settings, source: S) -> Self {
        Self {
            request,
            settings,
            source,
        }
    }

    /// Path the source writes to, `<dir>/<id>.ent` by default.
    pub fn legacy_path(&self) -> PathBuf {
        self.output_file(&self.settings.legacy_extension)
    }

    /// Final path of the structure, `<dir>/<id>.pdb` by default.
    pub fn target_path(&self) -> PathBuf {
        self.output_file(&self.settings.target_extension)
    }

    fn output_file(&self, extension: &str) -> PathBuf {
        self.request
            .output_directory()
            .join(format!("{}.{extension}", self.request.identifier()))
    }

    /// Download the structure into the output directory.
    pub fn fetch(&self) -> Result<PathBuf> {
        self.source.retrieve(
            self.request.identifier(),
            &self.settings.format,
            self.request.output_directory(),
        )
    }

    /// Move the downloaded file to its target name, replacing any earlier copy.
    pub fn rename(&self) -> Result<PathBuf> {
        let from = self.legacy_path();
        let to = self.target_path();
        std::fs::rename(&from, &to).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RetrievalError::MissingFile(from.clone()),
            _ => RetrievalError::io(&from, e),
        })?;
        debug!("Renamed {} to {}", from.display(), to.display());
        Ok(to)
    }

    /// Fetch, then rename. Nothing is renamed if the fetch fails.
    pub fn run(&self) -> Result<PathBuf> {
        self.fetch()?;
        self.rename()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::Path;

    /// Writes a fixed payload, or nothing at all.
    struct FakeSource {
        payload: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn serving(payload: &'static str) -> Self {
            Self {
                payload: Some(payload),
                calls: Cell::new(0),
            }
        }

        fn unknown() -> Self {
            Self {
                payload: None,
                calls: Cell::new(0),
            }
        }
    }

    impl StructureSource for FakeSource {
        fn retrieve(&self, identifier: &str, format: &str, destination: &Path) -> Result<PathBuf> {
            self.calls.set(self.calls.get() + 1);
            assert_eq!(format, "pdb");
            let payload = self.payload.ok_or(RetrievalError::UnknownStructure {
                identifier: identifier.to_string(),
                url: "fake".to_string(),
                status: 404,
            })?;
            std::fs::create_dir_all(destination).unwrap();
            let path = destination.join(format!("{identifier}.ent"));
            std::fs::write(&path, payload).unwrap();
            Ok(path)
        }
    }

    fn retriever(id: &str, dir: &Path, source: FakeSource) -> StructureRetriever<FakeSource> {
        let request = RetrievalRequest::new(id, dir, None).unwrap();
        StructureRetriever::new(request, Settings::default(), source)
    }

    #[test]
    fn run_leaves_only_target_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let r = retriever("4HHB", &out, FakeSource::serving("ATOM"));

        let path = r.run().unwrap();

        assert_eq!(path, out.join("4hhb.pdb"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ATOM");
        assert!(!out.join("4hhb.ent").exists());
    }

    #[test]
    fn identifier_case_does_not_change_output() {
        let dir = tempfile::tempdir().unwrap();
        let upper = retriever("1ABC", dir.path(), FakeSource::serving(""));
        let lower = retriever("1abc", dir.path(), FakeSource::serving(""));
        assert_eq!(upper.target_path(), lower.target_path());
        assert_eq!(upper.legacy_path(), dir.path().join("1abc.ent"));
    }

    #[test]
    fn failed_fetch_skips_rename() {
        let dir = tempfile::tempdir().unwrap();
        let r = retriever("0zzz", dir.path(), FakeSource::unknown());

        let err = r.run().unwrap_err();

        assert!(matches!(err, RetrievalError::UnknownStructure { .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn rename_without_fetch_is_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let r = retriever("4hhb", dir.path(), FakeSource::serving("ATOM"));

        match r.rename() {
            Err(RetrievalError::MissingFile(path)) => assert_eq!(path, dir.path().join("4hhb.ent")),
            other => panic!("expected MissingFile, got {other:?}"),
        }
        assert_eq!(r.source.calls.get(), 0);
    }

    #[test]
    fn second_run_refetches_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let first = retriever("4hhb", dir.path(), FakeSource::serving("first"));
        first.run().unwrap();

        let second = retriever("4hhb", dir.path(), FakeSource::serving("second"));
        let path = second.run().unwrap();

        assert_eq!(second.source.calls.get(), 1);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
        assert!(!dir.path().join("4hhb.ent").exists());
    }
}
