//! Engine equivalence properties.
//!
//! Kruskal and Prim may pick different edges when weights tie, but their
//! forests must agree with the oracle on total weight, edge count, and
//! component count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{MinimumSpanningForest, MstAlgorithm};

use super::helpers::{sum_weights, weights_match};
use super::oracle::dense_prim;
use super::types::MstFixture;

/// Compares each engine with the dense-matrix oracle.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let oracle = dense_prim(&fixture.graph);

    for algorithm in MstAlgorithm::ALL {
        let forest = algorithm.compute(&fixture.graph);
        if !weights_match(forest.total_weight(), oracle.total_weight) {
            return Err(TestCaseError::fail(format!(
                "{algorithm} weight {} differs from oracle {} ({})",
                forest.total_weight(),
                oracle.total_weight,
                fixture.context(),
            )));
        }
        if forest.edge_count() != oracle.edge_count {
            return Err(TestCaseError::fail(format!(
                "{algorithm} kept {} edges, oracle kept {} ({})",
                forest.edge_count(),
                oracle.edge_count,
                fixture.context(),
            )));
        }
        if forest.component_count() != oracle.component_count {
            return Err(TestCaseError::fail(format!(
                "{algorithm} found {} components, oracle found {} ({})",
                forest.component_count(),
                oracle.component_count,
                fixture.context(),
            )));
        }
    }
    Ok(())
}

/// Compares Kruskal with Prim directly and checks the reported totals.
pub(super) fn run_engine_agreement_property(fixture: &MstFixture) -> TestCaseResult {
    let by_kruskal = MstAlgorithm::Kruskal.compute(&fixture.graph);
    let by_prim = MstAlgorithm::Prim.compute(&fixture.graph);

    if !weights_match(by_kruskal.total_weight(), by_prim.total_weight()) {
        return Err(TestCaseError::fail(format!(
            "kruskal={} prim={} ({})",
            by_kruskal.total_weight(),
            by_prim.total_weight(),
            fixture.context(),
        )));
    }
    check_reported_total(&by_kruskal, fixture)?;
    check_reported_total(&by_prim, fixture)
}

fn check_reported_total(forest: &MinimumSpanningForest, fixture: &MstFixture) -> TestCaseResult {
    let summed = sum_weights(forest.edges());
    if weights_match(summed, forest.total_weight()) {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "reported total {} but edges sum to {summed} ({})",
            forest.total_weight(),
            fixture.context(),
        )))
    }
}
