//! Report generation via a completion provider.
//!
//! `ReportGenerator` resolves the raw input against the catalog, builds the
//! analysis prompt and issues exactly one completion request. Provider
//! errors are folded into [`ReportOutcome::Failed`]; nothing propagates past
//! `generate`.

use tracing::{Instrument, debug, info_span, warn};

use analyzer_types::config::AnalyzerConfig;
use analyzer_types::llm::{CompletionRequest, Message, StopReason};
use analyzer_types::report::{AnalysisRequest, GenerationFailure, Report, ReportOutcome};

use crate::catalog::KnownServiceCatalog;
use crate::llm::box_provider::BoxLlmProvider;
use crate::prompt::PromptBuilder;

/// System instruction sent ahead of every analysis prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are a professional business analyst specializing in digital services and technology products. Provide detailed, accurate, and well-structured analysis reports.";

/// Fixed request parameters for report generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Credential name used in the failure hint.
    pub credential_label: String,
}

impl From<&AnalyzerConfig> for GenerationSettings {
    fn from(config: &AnalyzerConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            credential_label: config.credential_label.clone(),
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::from(&AnalyzerConfig::default())
    }
}

pub struct ReportGenerator {
    provider: BoxLlmProvider,
    catalog: KnownServiceCatalog,
    settings: GenerationSettings,
}

impl ReportGenerator {
    pub fn new(provider: BoxLlmProvider, settings: GenerationSettings) -> Self {
        Self {
            provider,
            catalog: KnownServiceCatalog::new(),
            settings,
        }
    }

    /// Resolve raw user input against the catalog.
    pub fn resolve(&self, raw_input: &str) -> AnalysisRequest {
        self.catalog.resolve(raw_input)
    }

    /// Build the completion request for an analysis request.
    pub fn build_request(&self, request: &AnalysisRequest) -> CompletionRequest {
        let prompt = PromptBuilder::build(&request.resolved_info, request.is_known);
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![Message::system(SYSTEM_INSTRUCTION), Message::user(prompt)],
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        }
    }

    /// Generate a report for raw user input.
    pub async fn generate(&self, raw_input: &str) -> ReportOutcome {
        let request = self.resolve(raw_input);
        self.generate_for(&request).await
    }

    /// Generate a report for an already-resolved request.
    pub async fn generate_for(&self, request: &AnalysisRequest) -> ReportOutcome {
        let completion_request = self.build_request(request);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %completion_request.model,
            gen_ai.request.max_tokens = completion_request.max_tokens,
            gen_ai.request.temperature = ?completion_request.temperature,
            service.known = request.is_known,
        );

        match self.provider.complete(&completion_request).instrument(span).await {
            Ok(response) => {
                debug!(
                    response_id = %response.id,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    stop_reason = %response.stop_reason,
                    "Report generated"
                );
                if response.stop_reason == StopReason::MaxTokens {
                    warn!(
                        max_tokens = completion_request.max_tokens,
                        "Report hit the output token limit and may be truncated"
                    );
                }
                ReportOutcome::Generated(Report::new(response.content))
            }
            Err(err) => {
                debug!(error = %err, "Report generation failed");
                ReportOutcome::Failed(GenerationFailure {
                    message: err.to_string(),
                    credential_label: self.settings.credential_label.clone(),
                })
            }
        }
    }
}
