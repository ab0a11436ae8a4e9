//! Configuration types for the service analyzer.
//!
//! `AnalyzerConfig` represents the optional `config.toml` that controls the
//! completion model, sampling parameters, provider endpoint and output
//! defaults. Every field has a default matching the stock behavior.

use serde::{Deserialize, Serialize};

use crate::report::DEFAULT_REPORT_FILENAME;

/// Top-level configuration, loaded from `~/.service-analyzer/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on generated tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Base URL of the OpenAI-compatible endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Credential name shown in generation failure hints.
    #[serde(default = "default_credential_label")]
    pub credential_label: String,

    /// Filename used when a report is saved without an explicit name.
    #[serde(default = "default_output")]
    pub default_output: String,
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_max_tokens() -> u32 {
    3000
}

fn default_temperature() -> f64 {
    0.7
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_credential_label() -> String {
    "OpenAI API key".to_string()
}

fn default_output() -> String {
    DEFAULT_REPORT_FILENAME.to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            credential_label: default_credential_label(),
            default_output: default_output(),
        }
    }
}
