//! LlmProvider trait definition.

use analyzer_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion provider backends.
///
/// Uses native async fn in traits (RPITIT). Implementations live in
/// analyzer-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
