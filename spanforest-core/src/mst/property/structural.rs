//! Structural invariants of every returned forest.
//!
//! - **Subset**: each forest edge exists in the input with the same weight.
//! - **Acyclicity**: replaying the edges through a union-find never closes a
//!   cycle.
//! - **Edge count**: `n - c` edges for `c` components of the input.
//! - **Ordering**: edges are sorted by `(weight, source, target)`.
//! - **Determinism**: a second run returns an identical forest.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::Edge;
use crate::mst::{MinimumSpanningForest, MstAlgorithm};
use crate::union_find::DisjointSet;

use super::types::MstFixture;

/// Runs every structural check for both engines.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let input_components = fixture.graph.component_count();

    for algorithm in MstAlgorithm::ALL {
        let forest = algorithm.compute(&fixture.graph);
        let fail = |message: String| {
            TestCaseError::fail(format!("{algorithm}: {message} ({})", fixture.context()))
        };

        validate_subset(fixture, forest.edges()).map_err(&fail)?;
        validate_acyclicity(fixture.graph.node_count(), forest.edges()).map_err(&fail)?;
        validate_edge_count(&forest, input_components).map_err(&fail)?;
        validate_sorted(forest.edges()).map_err(&fail)?;

        if algorithm.compute(&fixture.graph) != forest {
            return Err(fail("repeated run produced a different forest".to_owned()));
        }
    }
    Ok(())
}

fn validate_subset(fixture: &MstFixture, edges: &[Edge]) -> Result<(), String> {
    for edge in edges {
        let present = fixture
            .graph
            .edges()
            .iter()
            .any(|candidate| candidate == edge);
        if !present {
            return Err(format!("edge {:?} is not in the input graph", edge.endpoints()));
        }
    }
    Ok(())
}

fn validate_acyclicity(node_count: usize, edges: &[Edge]) -> Result<(), String> {
    let mut sets = DisjointSet::make_set(node_count);
    for edge in edges {
        if !sets.union(edge.source(), edge.target()) {
            return Err(format!("edge {:?} closes a cycle", edge.endpoints()));
        }
    }
    Ok(())
}

fn validate_edge_count(
    forest: &MinimumSpanningForest,
    input_components: usize,
) -> Result<(), String> {
    if forest.component_count() != input_components {
        return Err(format!(
            "forest reports {} components, input has {input_components}",
            forest.component_count(),
        ));
    }
    let expected = forest.node_count() - input_components;
    if forest.edge_count() != expected {
        return Err(format!(
            "{} edges, expected n - c = {expected}",
            forest.edge_count(),
        ));
    }
    Ok(())
}

fn validate_sorted(edges: &[Edge]) -> Result<(), String> {
    match edges.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(index) => Err(format!("edges out of order at position {index}")),
        None => Ok(()),
    }
}
