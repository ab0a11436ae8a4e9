//! Configuration and defaults for OpenAI-compatible providers.

use secrecy::SecretString;

/// Base URL of the hosted OpenAI API.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: SecretString,
    /// Model identifier (e.g., "gpt-4.1-mini").
    pub model: String,
}

/// OpenAI default configuration.
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key,
        model: model.into(),
    }
}

/// Configuration for any other endpoint speaking the chat completions
/// protocol (local gateways, proxies, other vendors).
pub fn custom_endpoint(api_key: SecretString, base_url: &str, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai_compatible".into(),
        base_url: base_url.trim_end_matches('/').into(),
        api_key,
        model: model.into(),
    }
}
