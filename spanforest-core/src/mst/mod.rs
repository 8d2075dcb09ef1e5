//! Minimum spanning forest engines.
//!
//! Two sequential engines share one result type: [`kruskal`] sorts edges and
//! merges components with a [`crate::DisjointSet`], while [`prim`] grows one
//! tree per component from a binary-heap frontier. Neither mutates the input
//! [`Graph`]; both accept disconnected graphs and return a spanning forest.

mod frontier;
mod kruskal;
mod prim;

use std::fmt;

use crate::graph::{Edge, Graph};

pub use self::kruskal::kruskal;
pub use self::prim::prim;

/// Selects one of the MST engines.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MstAlgorithm {
    /// Sort edges, then accept those joining distinct components.
    Kruskal,
    /// Grow each tree from a seed vertex along the cheapest frontier edge.
    Prim,
}

impl MstAlgorithm {
    /// Every engine, in reporting order.
    pub const ALL: [Self; 2] = [Self::Kruskal, Self::Prim];

    /// Runs this engine on `graph`.
    #[must_use]
    pub fn compute(self, graph: &Graph) -> MinimumSpanningForest {
        match self {
            Self::Kruskal => kruskal(graph),
            Self::Prim => prim(graph),
        }
    }

    /// Returns the stable lower-case name used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Edges are stored sorted by `(weight, source, target)`.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest {
    node_count: usize,
    edges: Vec<Edge>,
    total_weight: f64,
    component_count: usize,
}

impl MinimumSpanningForest {
    pub(crate) fn new(
        node_count: usize,
        mut edges: Vec<Edge>,
        total_weight: f64,
        component_count: usize,
    ) -> Self {
        edges.sort_unstable();
        Self {
            node_count,
            edges,
            total_weight,
            component_count,
        }
    }

    /// Returns the forest edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of forest edges, `n - c` for `c` components.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the sum of the forest's edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of trees, counting isolated vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

#[cfg(test)]
mod property;
