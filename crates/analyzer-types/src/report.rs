//! Analysis request and report outcome types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default filename used when a report is saved without an explicit name.
pub const DEFAULT_REPORT_FILENAME: &str = "service_analysis_report.md";

/// A single analysis request, derived from the user's raw input.
///
/// `is_known` is true iff the trimmed, lowercased input names a catalog
/// entry. `resolved_info` is the text handed to the prompt builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub raw_input: String,
    pub is_known: bool,
    pub resolved_info: String,
}

/// A generated markdown report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub content: String,
}

impl Report {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A failed generation attempt, rendered as a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationFailure {
    /// Underlying provider error message.
    pub message: String,
    /// Name of the credential the user should check (e.g. "OpenAI API key").
    pub credential_label: String,
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error generating report: {}\n\nPlease check your {} and internet connection.",
            self.message, self.credential_label
        )
    }
}

/// Result of one generation attempt.
///
/// Callers must match on the variant before treating the text as a report;
/// failures are never written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    Generated(Report),
    Failed(GenerationFailure),
}

impl ReportOutcome {
    /// The text shown to the user: the report content or the failure message.
    pub fn text(&self) -> String {
        match self {
            ReportOutcome::Generated(report) => report.content.clone(),
            ReportOutcome::Failed(failure) => failure.to_string(),
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            ReportOutcome::Generated(report) => Some(report),
            ReportOutcome::Failed(_) => None,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, ReportOutcome::Generated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> GenerationFailure {
        GenerationFailure {
            message: "connection reset".to_string(),
            credential_label: "OpenAI API key".to_string(),
        }
    }

    #[test]
    fn test_failure_display_format() {
        assert_eq!(
            failure().to_string(),
            "Error generating report: connection reset\n\nPlease check your OpenAI API key and internet connection."
        );
    }

    #[test]
    fn test_outcome_text_generated_is_verbatim() {
        let outcome = ReportOutcome::Generated(Report::new("# Report\n\nbody"));
        assert_eq!(outcome.text(), "# Report\n\nbody");
        assert!(outcome.is_generated());
        assert!(outcome.report().is_some());
    }

    #[test]
    fn test_outcome_text_failed() {
        let outcome = ReportOutcome::Failed(failure());
        assert!(outcome.text().starts_with("Error generating report:"));
        assert!(!outcome.is_generated());
        assert!(outcome.report().is_none());
    }

    #[test]
    fn test_outcome_serde_tag() {
        let json = serde_json::to_string(&ReportOutcome::Failed(failure())).unwrap();
        assert!(json.contains("\"status\":\"failed\""));
    }
}
