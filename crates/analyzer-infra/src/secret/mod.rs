//! Credential providers.
//!
//! - `env`: environment variable provider, with optional `.env` loading

pub mod env;
