//! Business logic for the service analyzer.
//!
//! - `catalog`: the fixed table of recognized services
//! - `prompt`: analysis prompt construction
//! - `llm`: the completion provider abstraction
//! - `report`: report generation and the sink trait for saving reports
//!
//! Infrastructure (HTTP provider, filesystem sink, config loading) lives in
//! `analyzer-infra`.

pub mod catalog;
pub mod llm;
pub mod prompt;
pub mod report;
