//! Shared domain types for the service analyzer.
//!
//! Request/response shapes for the completion provider, the analysis request
//! and report outcome, configuration, and the error enums used across crates.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod report;
