//! Configuration loader for the service analyzer.
//!
//! Reads `config.toml` from the data directory (`~/.service-analyzer/` by
//! default) and deserializes it into [`AnalyzerConfig`]. Falls back to the
//! built-in defaults when the file is missing or malformed. An explicitly
//! requested file (`--config`) is loaded strictly instead.

use std::path::{Path, PathBuf};

use analyzer_types::config::AnalyzerConfig;
use analyzer_types::error::ConfigError;

/// Resolve the data directory.
///
/// `SERVICE_ANALYZER_DATA_DIR` wins; otherwise `~/.service-analyzer`, or
/// `./.service-analyzer` when no home directory is known.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SERVICE_ANALYZER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".service-analyzer");
    }

    PathBuf::from(".service-analyzer")
}

/// Load configuration from `{data_dir}/config.toml`, defaulting on any problem.
pub async fn load_config(data_dir: &Path) -> AnalyzerConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AnalyzerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AnalyzerConfig::default();
        }
    };

    match toml::from_str::<AnalyzerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AnalyzerConfig::default()
        }
    }
}

/// Load configuration from an explicit path. Errors are returned, not defaulted.
pub async fn load_config_file(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    toml::from_str::<AnalyzerConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
