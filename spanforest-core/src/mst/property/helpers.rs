//! Shared helpers for MST property tests.

use crate::graph::Edge;

/// Absolute tolerance applied when comparing forest weights.
///
/// Engines accumulate weights in different orders, so sums can differ in
/// the last few bits.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Returns `true` when two forest weights are equal up to summation error.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= WEIGHT_TOLERANCE * scale
}

/// Sums edge weights in slice order.
pub(super) fn sum_weights(edges: &[Edge]) -> f64 {
    edges.iter().map(Edge::weight).sum()
}
