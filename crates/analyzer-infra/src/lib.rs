//! Infrastructure layer for the service analyzer.
//!
//! Implements the traits defined in `analyzer-core`: the OpenAI-compatible
//! completion provider and the filesystem report sink. Also owns startup
//! concerns: `.env` loading, credential lookup and config file parsing.

pub mod config;
pub mod filesystem;
pub mod llm;
pub mod secret;
