use std::path::PathBuf;

use thiserror::Error;

/// Errors resolving the provider credential at startup.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("{0} environment variable not found")]
    Missing(String),

    #[error("{0} environment variable is empty")]
    Empty(String),
}

/// Errors loading an explicitly requested configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Errors writing a report to disk.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
