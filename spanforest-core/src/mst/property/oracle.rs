//! Dense-matrix Prim oracle.
//!
//! An `O(n^2)` formulation with no heap and no union-find, so it shares no
//! code with either engine under test.

use crate::graph::Graph;

/// Summary of the oracle's minimum spanning forest.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    pub total_weight: f64,
    pub edge_count: usize,
    pub component_count: usize,
}

/// Computes the minimum spanning forest of `graph` by scanning a weight
/// matrix for the cheapest attachment at every step.
pub(super) fn dense_prim(graph: &Graph) -> OracleForest {
    let n = graph.node_count();
    let mut matrix = vec![vec![f64::INFINITY; n]; n];
    for edge in graph.edges() {
        let (s, t) = edge.endpoints();
        matrix[s][t] = edge.weight();
        matrix[t][s] = edge.weight();
    }

    let mut in_tree = vec![false; n];
    let mut best = vec![f64::INFINITY; n];
    let mut total_weight = 0.0;
    let mut edge_count = 0;
    let mut component_count = 0;

    for _ in 0..n {
        let mut next = None;
        for node in 0..n {
            if in_tree[node] {
                continue;
            }
            match next {
                Some(current) if best[current] <= best[node] => {}
                _ => next = Some(node),
            }
        }
        let Some(node) = next else { break };

        if best[node].is_finite() {
            total_weight += best[node];
            edge_count += 1;
        } else {
            component_count += 1;
        }
        in_tree[node] = true;

        for other in 0..n {
            if !in_tree[other] && matrix[node][other] < best[other] {
                best[other] = matrix[node][other];
            }
        }
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count,
    }
}
