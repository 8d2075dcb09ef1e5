//! Fixture types for MST property tests.

use crate::graph::Graph;

/// Shape of the generated graph and its weights.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Continuous weights, so the minimum forest is almost surely unique.
    Unique,
    /// Integral weights from a pool of at most three values, forcing ties.
    ManyIdentical,
    /// Roughly `n` to `2n` edges drawn in target-count mode.
    Sparse,
    /// Edge probability between 0.7 and 0.95 on a smaller vertex set.
    Dense,
    /// Several generated components with no edges between them.
    Disconnected,
}

/// A generated graph plus the distribution that produced it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub graph: Graph,
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Short description used in failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.graph.node_count(),
            self.graph.edge_count(),
        )
    }
}
