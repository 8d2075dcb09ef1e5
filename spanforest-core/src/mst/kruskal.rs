//! Sequential Kruskal engine.

use tracing::instrument;

use crate::{graph::Graph, union_find::DisjointSet};

use super::MinimumSpanningForest;

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are sorted by `(weight, source, target)` so equal weights resolve the
/// same way on every run. Scanning stops once `n - 1` edges are accepted; for a
/// disconnected graph it runs to the end and yields one tree per component.
///
/// # Examples
/// ```
/// use spanforest_core::{Graph, kruskal};
///
/// let graph = Graph::new(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)])
///     .expect("graph is valid");
/// let forest = kruskal(&graph);
/// assert_eq!(forest.edge_count(), 2);
/// assert_eq!(forest.total_weight(), 3.0);
/// assert!(forest.is_tree());
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    level = "trace",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph) -> MinimumSpanningForest {
    let node_count = graph.node_count();
    let target_edges = node_count.saturating_sub(1);

    let mut sorted = graph.edges().to_vec();
    sorted.sort_unstable();

    let mut sets = DisjointSet::make_set(node_count);
    let mut forest = Vec::with_capacity(target_edges);
    let mut total_weight = 0.0;

    for edge in sorted {
        if forest.len() == target_edges {
            break;
        }
        if sets.union(edge.source(), edge.target()) {
            total_weight += edge.weight();
            forest.push(edge);
        }
    }

    MinimumSpanningForest::new(node_count, forest, total_weight, sets.components())
}
