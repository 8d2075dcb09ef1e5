//! Lazy Prim engine.
//!
//! Stale frontier entries are left in the queue and skipped when popped, which
//! keeps the queue a plain binary heap without decrease-key.

use tracing::instrument;

use crate::graph::Graph;

use super::{MinimumSpanningForest, frontier::MinQueue};

/// A vertex waiting on the frontier and the edge that would attach it.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    node: usize,
    via: Option<usize>,
}

/// Computes a minimum spanning forest with Prim's algorithm.
///
/// Each component is grown from its lowest-numbered vertex. Among candidates
/// of equal weight the one discovered first wins, so results only depend on
/// the graph's edge order.
///
/// # Examples
/// ```
/// use spanforest_core::{Graph, prim};
///
/// let graph = Graph::new(4, [(0, 1, 1.0), (2, 3, 4.0)]).expect("graph is valid");
/// let forest = prim(&graph);
/// assert_eq!(forest.edge_count(), 2);
/// assert_eq!(forest.component_count(), 2);
/// assert_eq!(forest.total_weight(), 5.0);
/// ```
#[must_use]
#[instrument(
    name = "mst.prim",
    level = "trace",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn prim(graph: &Graph) -> MinimumSpanningForest {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut queue = MinQueue::with_capacity(graph.edge_count().saturating_add(1));
    let mut forest = Vec::with_capacity(node_count.saturating_sub(1));
    let mut total_weight = 0.0;
    let mut components = 0;

    for seed in 0..node_count {
        if visited[seed] {
            continue;
        }
        components += 1;
        queue.push(0.0, Candidate {
            node: seed,
            via: None,
        });

        while let Some((_, candidate)) = queue.pop_min() {
            if visited[candidate.node] {
                continue;
            }
            visited[candidate.node] = true;

            if let Some(edge) = candidate.via.and_then(|index| graph.edge(index)) {
                total_weight += edge.weight();
                forest.push(*edge);
            }

            for neighbour in graph.neighbours(candidate.node) {
                if !visited[neighbour.node()] {
                    queue.push(neighbour.weight(), Candidate {
                        node: neighbour.node(),
                        via: Some(neighbour.edge_index()),
                    });
                }
            }
        }
        debug_assert!(queue.is_empty());
    }

    MinimumSpanningForest::new(node_count, forest, total_weight, components)
}
