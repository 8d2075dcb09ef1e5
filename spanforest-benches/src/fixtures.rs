//! Seeded graph fixtures shared by the Criterion benchmarks.
//!
//! Graphs are drawn from a `SmallRng` seeded per benchmark so every run of a
//! benchmark measures the same input.

use rand::{SeedableRng, rngs::SmallRng};
use spanforest_core::{GeneratorBuilder, Graph, GraphGenerator};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Inclusive weight range used by every benchmark graph.
pub const WEIGHT_RANGE: (f64, f64) = (0.0, 100.0);

/// Builds the generator described by `params`.
///
/// # Errors
///
/// Returns [`BenchSetupError::Generator`] if the parameters are invalid.
pub fn generator(params: &GraphBenchParams) -> Result<GraphGenerator, BenchSetupError> {
    let (min, max) = WEIGHT_RANGE;
    Ok(GeneratorBuilder::new(params.vertex_count)
        .with_weight_range(min, max)
        .with_density(params.density)
        .build()?)
}

/// Generates one graph for `params` from `seed`.
///
/// # Errors
///
/// Returns [`BenchSetupError::Generator`] if the parameters are invalid.
///
/// # Examples
///
/// ```
/// use spanforest_benches::{fixtures::seeded_graph, params::GraphBenchParams};
/// use spanforest_core::EdgeDensity;
///
/// let params = GraphBenchParams { vertex_count: 10, density: EdgeDensity::Count(12) };
/// let graph = seeded_graph(&params, 42).expect("valid parameters");
/// assert_eq!(graph.edge_count(), 12);
/// ```
pub fn seeded_graph(params: &GraphBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok(generator(params)?.generate(&mut rng)?)
}
