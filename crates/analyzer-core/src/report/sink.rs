//! Report persistence.
//!
//! `ReportSink` abstracts the write itself so the save policy (default
//! filename, diagnostics, non-fatal failure) can be tested without touching
//! disk. The filesystem implementation lives in analyzer-infra.

use std::path::{Path, PathBuf};

use analyzer_types::error::SinkError;
use analyzer_types::report::Report;

/// Destination for generated reports.
pub trait ReportSink: Send + Sync {
    /// Write `content` to `path`, replacing any existing file.
    fn write(
        &self,
        path: &Path,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), SinkError>> + Send;
}

/// Applies the save policy on top of a [`ReportSink`].
pub struct ReportSaver<S> {
    sink: S,
    default_filename: String,
}

impl<S: ReportSink> ReportSaver<S> {
    pub fn new(sink: S, default_filename: impl Into<String>) -> Self {
        Self {
            sink,
            default_filename: default_filename.into(),
        }
    }

    /// Target path for `filename`, falling back to the default when absent
    /// or blank.
    pub fn target_path(&self, filename: Option<&str>) -> PathBuf {
        match filename.map(str::trim) {
            Some(name) if !name.is_empty() => PathBuf::from(name),
            _ => PathBuf::from(&self.default_filename),
        }
    }

    /// Save `report`. Returns the written path, or `None` after printing a
    /// diagnostic when the write fails.
    pub async fn save(&self, report: &Report, filename: Option<&str>) -> Option<PathBuf> {
        let path = self.target_path(filename);
        match self.sink.write(&path, &report.content).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), bytes = report.content.len(), "Report saved");
                Some(path)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to save report");
                eprintln!("Error saving report: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct MemorySink {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl ReportSink for MemorySink {
        async fn write(&self, path: &Path, content: &str) -> Result<(), SinkError> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }
    }

    struct FailingSink;

    impl ReportSink for FailingSink {
        async fn write(&self, path: &Path, _content: &str) -> Result<(), SinkError> {
            Err(SinkError::Write {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[tokio::test]
    async fn test_save_uses_default_filename() {
        let saver = ReportSaver::new(MemorySink::default(), "service_analysis_report.md");
        let path = saver.save(&Report::new("body"), None).await.unwrap();

        assert_eq!(path, PathBuf::from("service_analysis_report.md"));
        let files = saver.sink.files.lock().unwrap();
        assert_eq!(files.get(&path).map(String::as_str), Some("body"));
    }

    #[tokio::test]
    async fn test_blank_filename_falls_back_to_default() {
        let saver = ReportSaver::new(MemorySink::default(), "default.md");
        assert_eq!(saver.target_path(Some("   ")), PathBuf::from("default.md"));
        assert_eq!(saver.target_path(Some("")), PathBuf::from("default.md"));
        assert_eq!(saver.target_path(Some("x.md")), PathBuf::from("x.md"));
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let saver = ReportSaver::new(MemorySink::default(), "default.md");
        saver.save(&Report::new("first"), Some("x.md")).await;
        saver.save(&Report::new("second"), Some("x.md")).await;

        let files = saver.sink.files.lock().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[&PathBuf::from("x.md")], "second");
    }

    #[tokio::test]
    async fn test_failed_write_returns_none() {
        let saver = ReportSaver::new(FailingSink, "default.md");
        assert!(saver.save(&Report::new("body"), Some("x.md")).await.is_none());
    }
}
