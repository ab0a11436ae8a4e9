//! Report generation and persistence.

pub mod generator;
pub mod sink;
