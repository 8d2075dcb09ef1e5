//! Shared test utilities used across spanforest crates.

pub mod profile;
pub mod tracing;
