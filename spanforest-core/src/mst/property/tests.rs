//! Proptest runners, seeded rstest cases, and oracle sanity checks.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::graph::Graph;
use crate::test_utils::suite_proptest_config;

use super::equivalence::{run_engine_agreement_property, run_oracle_equivalence_property};
use super::oracle::{OracleForest, dense_prim};
use super::strategies::{generate_fixture, mst_fixture_strategy};
use super::structural::run_structural_invariants_property;
use super::types::WeightDistribution;

/// Expands to an rstest function running `$runner` on fixed seeds for every
/// distribution.
macro_rules! parameterised_property_test {
    ($test_name:ident, $runner:path, $expectation:expr) => {
        #[rstest::rstest]
        #[case::unique_42(WeightDistribution::Unique, 42)]
        #[case::unique_999(WeightDistribution::Unique, 999)]
        #[case::identical_42(WeightDistribution::ManyIdentical, 42)]
        #[case::identical_999(WeightDistribution::ManyIdentical, 999)]
        #[case::identical_7777(WeightDistribution::ManyIdentical, 7777)]
        #[case::sparse_42(WeightDistribution::Sparse, 42)]
        #[case::sparse_999(WeightDistribution::Sparse, 999)]
        #[case::dense_42(WeightDistribution::Dense, 42)]
        #[case::dense_999(WeightDistribution::Dense, 999)]
        #[case::disconnected_42(WeightDistribution::Disconnected, 42)]
        #[case::disconnected_999(WeightDistribution::Disconnected, 999)]
        fn $test_name(#[case] distribution: WeightDistribution, #[case] seed: u64) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let fixture = generate_fixture(distribution, &mut rng);
            $runner(&fixture).expect($expectation);
        }
    };
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn mst_oracle_equivalence(fixture in mst_fixture_strategy()) {
        run_oracle_equivalence_property(&fixture)?;
    }

    #[test]
    fn mst_engine_agreement(fixture in mst_fixture_strategy()) {
        run_engine_agreement_property(&fixture)?;
    }

    #[test]
    fn mst_structural_invariants(fixture in mst_fixture_strategy()) {
        run_structural_invariants_property(&fixture)?;
    }
}

parameterised_property_test!(
    oracle_equivalence_rstest,
    run_oracle_equivalence_property,
    "oracle equivalence must hold"
);

parameterised_property_test!(
    engine_agreement_rstest,
    run_engine_agreement_property,
    "engines must agree"
);

parameterised_property_test!(
    structural_invariants_rstest,
    run_structural_invariants_property,
    "structural invariants must hold"
);

#[test]
fn disconnected_fixtures_have_several_components() {
    for seed in 0..16 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fixture = generate_fixture(WeightDistribution::Disconnected, &mut rng);
        assert!(
            fixture.graph.component_count() >= 2,
            "seed {seed}: {}",
            fixture.context()
        );
    }
}

fn oracle_of(node_count: usize, edges: &[(usize, usize, f64)]) -> OracleForest {
    let graph = Graph::new(node_count, edges.iter().copied())
        .expect("oracle fixture must be valid");
    dense_prim(&graph)
}

fn assert_oracle(result: &OracleForest, weight: f64, edges: usize, components: usize) {
    assert!(
        (result.total_weight - weight).abs() < 1e-12,
        "weight {} != {weight}",
        result.total_weight
    );
    assert_eq!(result.edge_count, edges);
    assert_eq!(result.component_count, components);
}

#[test]
fn oracle_square() {
    let result = oracle_of(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)]);
    assert_oracle(&result, 6.0, 3, 1);
}

#[test]
fn oracle_disconnected() {
    let result = oracle_of(5, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0), (3, 4, 5.0)]);
    assert_oracle(&result, 8.0, 3, 2);
}

#[test]
fn oracle_edgeless() {
    assert_oracle(&oracle_of(3, &[]), 0.0, 0, 3);
}
