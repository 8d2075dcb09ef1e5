//! Benchmark parameter types.

use std::fmt;

use spanforest_core::EdgeDensity;

/// Shape of the graphs fed to a generation or MST benchmark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphBenchParams {
    /// Number of vertices in each graph.
    pub vertex_count: usize,
    /// Edge probability or exact edge count.
    pub density: EdgeDensity,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.density)
    }
}
