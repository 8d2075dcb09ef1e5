//! Benchmark support crate for spanforest.
//!
//! Provides parameter types and seeded graph fixtures used by the Criterion
//! benchmarks for graph generation and the two spanning forest engines.

pub mod error;
pub mod fixtures;
pub mod params;
