//! Vertex-pair enumeration for target-count sampling.
//!
//! Pairs `(i, j)` with `i < j < n` are numbered in lexicographic order, so row
//! `i` starts at `i * (2n - i - 1) / 2`. Sampling indices without replacement
//! and decoding them avoids materialising all `n(n-1)/2` pairs.

use rand::Rng;

use crate::error::GeneratorError;

/// Samples `count` distinct vertex pairs, returned in lexicographic order.
pub(super) fn sample_pairs<R: Rng + ?Sized>(
    rng: &mut R,
    node_count: usize,
    max_edges: usize,
    count: usize,
) -> Result<Vec<(usize, usize)>, GeneratorError> {
    if count > max_edges {
        return Err(GeneratorError::InvalidEdgeCount {
            requested: count,
            max_edges,
        });
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut indices = rand::seq::index::sample(rng, max_edges, count).into_vec();
    indices.sort_unstable();
    Ok(indices
        .into_iter()
        .map(|index| pair_at(index, node_count))
        .collect())
}

/// Decodes a lexicographic pair index into `(i, j)` with `i < j`.
pub(super) fn pair_at(index: usize, node_count: usize) -> (usize, usize) {
    let target = index as u128;
    // Largest row whose first index is <= target.
    let mut low = 0_usize;
    let mut high = node_count.saturating_sub(1);
    while low + 1 < high {
        let mid = low + (high - low) / 2;
        if row_offset(mid, node_count) <= target {
            low = mid;
        } else {
            high = mid;
        }
    }
    let row = if high > low && row_offset(high, node_count) <= target {
        high
    } else {
        low
    };
    let column_offset = target - row_offset(row, node_count);
    (row, row + 1 + column_offset as usize)
}

fn row_offset(row: usize, node_count: usize) -> u128 {
    let row = row as u128;
    let n = node_count as u128;
    row * (2 * n - row - 1) / 2
}
