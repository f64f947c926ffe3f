use std::fs;
use std::path::PathBuf;

use crate::domain::errors::DomainError;
use crate::domain::ports::DocumentSink;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Sink(e.to_string())
    }
}

// ── Sink ─────────────────────────────────────────────────────────────────────

/// Saves rendered documents under a fixed export directory, creating it on
/// first use.
pub struct FileSystemSink {
    dir: PathBuf,
}

impl FileSystemSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSink for FileSystemSink {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<(), DomainError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        log::info!("saved {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_bytes_under_the_given_filename() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSystemSink::new(dir.path());
        sink.save(b"%PDF-1.4 test", "Order_ORD-2024-001.pdf").unwrap();

        let written = fs::read(dir.path().join("Order_ORD-2024-001.pdf")).unwrap();
        assert_eq!(written, b"%PDF-1.4 test");
    }

    #[test]
    fn creates_the_export_directory_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("pdf");
        let sink = FileSystemSink::new(&nested);
        sink.save(b"bytes", "a.pdf").unwrap();
        assert!(nested.join("a.pdf").exists());
    }

    #[test]
    fn unwritable_target_surfaces_as_a_sink_error() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the export directory should be.
        let blocker = dir.path().join("exports");
        fs::write(&blocker, b"in the way").unwrap();

        let sink = FileSystemSink::new(&blocker);
        let err = sink.save(b"bytes", "a.pdf").unwrap_err();
        assert!(matches!(err, DomainError::Sink(_)));
    }
}
