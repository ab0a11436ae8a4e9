//! Scripted completion providers for CLI tests.

use std::future::Future;
use std::sync::{Arc, Mutex};

use analyzer_core::llm::box_provider::BoxLlmProvider;
use analyzer_core::llm::provider::LlmProvider;
use analyzer_core::report::generator::{GenerationSettings, ReportGenerator};
use analyzer_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

/// Provider returning a fixed reply (or error) and counting calls.
pub struct ScriptedProvider {
    reply: Result<String, String>,
    calls: Arc<Mutex<usize>>,
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn complete(
        &self,
        _request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
        *self.calls.lock().unwrap() += 1;
        let reply = self.reply.clone();
        async move {
            match reply {
                Ok(content) => Ok(CompletionResponse {
                    id: "resp-test".to_string(),
                    content,
                    model: "scripted-model".to_string(),
                    stop_reason: StopReason::EndTurn,
                    usage: Usage::default(),
                }),
                Err(message) => Err(LlmError::Provider { message }),
            }
        }
    }
}

fn build(reply: Result<String, String>) -> (ReportGenerator, Arc<Mutex<usize>>) {
    let calls = Arc::new(Mutex::new(0));
    let provider = ScriptedProvider {
        reply,
        calls: Arc::clone(&calls),
    };
    (
        ReportGenerator::new(BoxLlmProvider::new(provider), GenerationSettings::default()),
        calls,
    )
}

/// Generator whose provider always returns `content`.
pub fn generator(content: &str) -> (ReportGenerator, Arc<Mutex<usize>>) {
    build(Ok(content.to_string()))
}

/// Generator whose provider always fails with `message`.
pub fn failing_generator(message: &str) -> ReportGenerator {
    build(Err(message.to_string())).0
}
