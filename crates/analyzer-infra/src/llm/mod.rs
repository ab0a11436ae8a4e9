//! Completion provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `analyzer-core`, and a factory ([`create_provider`])
//! that picks the endpoint from the loaded configuration.
//!
//! [`LlmProvider`]: analyzer_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;

use analyzer_core::llm::box_provider::BoxLlmProvider;
use analyzer_core::llm::provider::LlmProvider;
use analyzer_types::config::AnalyzerConfig;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::{OPENAI_BASE_URL, custom_endpoint};

/// Create a [`BoxLlmProvider`] for the configured endpoint.
///
/// The hosted OpenAI base URL gets the named `openai` provider; any other
/// base URL is treated as a generic OpenAI-compatible endpoint.
pub fn create_provider(config: &AnalyzerConfig, api_key: SecretString) -> BoxLlmProvider {
    let base_url = config.base_url.trim_end_matches('/');
    let provider = if base_url == OPENAI_BASE_URL {
        OpenAiCompatibleProvider::openai(api_key, &config.model)
    } else {
        OpenAiCompatibleProvider::new(custom_endpoint(api_key, base_url, &config.model))
    };

    tracing::debug!(
        provider = provider.name(),
        base_url = %base_url,
        model = %config.model,
        "Created completion provider"
    );

    BoxLlmProvider::new(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SecretString {
        SecretString::from("sk-test".to_string())
    }

    #[test]
    fn test_default_config_creates_openai_provider() {
        let provider = create_provider(&AnalyzerConfig::default(), key());
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_trailing_slash_still_openai() {
        let config = AnalyzerConfig {
            base_url: "https://api.openai.com/v1/".to_string(),
            ..AnalyzerConfig::default()
        };
        assert_eq!(create_provider(&config, key()).name(), "openai");
    }

    #[test]
    fn test_custom_base_url_creates_compatible_provider() {
        let config = AnalyzerConfig {
            base_url: "http://localhost:11434/v1".to_string(),
            model: "llama3".to_string(),
            ..AnalyzerConfig::default()
        };
        assert_eq!(create_provider(&config, key()).name(), "openai_compatible");
    }
}
