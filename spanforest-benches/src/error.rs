//! Benchmark setup error type.
//!
//! Lets setup helpers propagate generator failures with `?` instead of
//! panicking inside Criterion closures.

use spanforest_core::GeneratorError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator parameters were rejected or sampling failed.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
}
