//! Environment variable credential provider.
//!
//! The API key is read from a single environment variable (default
//! `OPENAI_API_KEY`). A `.env` file, when present, is loaded into the process
//! environment first; variables already set in the environment win.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use analyzer_types::error::CredentialError;

/// Load a `.env` file into the process environment.
///
/// With `path = None` the file is searched for in the current directory and
/// its ancestors. Returns the path that was loaded, or `None` if no file was
/// found or it could not be parsed (logged at warn level).
pub fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    let result = match path {
        Some(p) => dotenvy::from_path(p).map(|()| p.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match result {
        Ok(loaded) => {
            tracing::debug!(path = %loaded.display(), "Loaded environment file");
            Some(loaded)
        }
        Err(err) if err.not_found() => {
            tracing::debug!("No .env file found");
            None
        }
        Err(err) => {
            tracing::warn!("Failed to load .env file: {err}");
            None
        }
    }
}

/// Read-only credential provider backed by environment variables.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Look up `key`. Non-Unicode values are treated as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    /// Resolve `key` to a secret, failing when it is unset or blank.
    pub fn require(&self, key: &str) -> Result<SecretString, CredentialError> {
        match self.get(key) {
            Some(value) if value.trim().is_empty() => Err(CredentialError::Empty(key.to_string())),
            Some(value) => Ok(SecretString::from(value)),
            None => Err(CredentialError::Missing(key.to_string())),
        }
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}
