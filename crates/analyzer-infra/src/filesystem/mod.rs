//! Filesystem adapters.
//!
//! Implements the `ReportSink` trait from `analyzer-core` for real
//! filesystem I/O through `tokio::fs`.

use std::path::Path;

use analyzer_core::report::sink::ReportSink;
use analyzer_types::error::SinkError;

/// Writes reports to the local filesystem as UTF-8, replacing existing files.
///
/// Parent directories are not created: a missing directory is a write
/// failure like any other.
pub struct FileReportSink;

impl FileReportSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileReportSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for FileReportSink {
    async fn write(&self, path: &Path, content: &str) -> Result<(), SinkError> {
        tokio::fs::write(path, content)
            .await
            .map_err(|source| SinkError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use analyzer_core::report::sink::ReportSaver;
    use analyzer_types::report::Report;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_save_roundtrip_is_byte_exact() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("x.md");
        let report = Report::new("# Café Report\n\n- naïve ✓\r\n\ttabbed\n");

        let saver = ReportSaver::new(FileReportSink::new(), "service_analysis_report.md");
        let saved = saver.save(&report, path.to_str()).await.unwrap();

        assert_eq!(saved, path);
        let bytes = tokio::fs::read(&path).await.unwrap();
        assert_eq!(bytes, report.content.as_bytes());
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.md");
        tokio::fs::write(&path, "old content that is longer").await.unwrap();

        FileReportSink::new().write(&path, "new").await.unwrap();

        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "new");
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("report.md");

        let err = FileReportSink::new().write(&path, "body").await.unwrap_err();
        assert!(matches!(err, SinkError::Write { .. }));

        let saver = ReportSaver::new(FileReportSink::new(), "default.md");
        assert!(saver.save(&Report::new("body"), path.to_str()).await.is_none());
    }
}
