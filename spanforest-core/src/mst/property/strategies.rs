//! Graph strategies for MST property tests.
//!
//! Fixtures are drawn through [`GeneratorBuilder`] so the properties exercise
//! the same generation path the benchmark harness uses.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::generator::{GeneratorBuilder, WeightKind};
use crate::graph::Graph;

use super::types::{MstFixture, WeightDistribution};

const MIN_NODES: usize = 8;
const MAX_NODES: usize = 64;
/// Kept smaller so dense fixtures stay well below `n^2 / 2` edges.
const DENSE_MAX_NODES: usize = 32;

/// Generates fixtures across every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for one distribution, for targeted rstest cases.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let graph = match distribution {
        WeightDistribution::Unique => {
            let n = rng.gen_range(MIN_NODES..=MAX_NODES);
            let p = rng.gen_range(0.2..=0.6);
            generate(
                rng,
                GeneratorBuilder::new(n)
                    .with_weight_range(0.1, 100.0)
                    .with_edge_probability(p),
            )
        }
        WeightDistribution::ManyIdentical => {
            let n = rng.gen_range(MIN_NODES..=MAX_NODES);
            let p = rng.gen_range(0.3..=0.7);
            let top = f64::from(rng.gen_range(1_u8..=3));
            generate(
                rng,
                GeneratorBuilder::new(n)
                    .with_weight_range(1.0, top)
                    .with_weight_kind(WeightKind::Integral)
                    .with_edge_probability(p),
            )
        }
        WeightDistribution::Sparse => {
            let n = rng.gen_range(MIN_NODES..=MAX_NODES);
            generate(
                rng,
                GeneratorBuilder::new(n)
                    .with_weight_range(0.1, 100.0)
                    .with_edge_count_range(n - 1, 2 * n),
            )
        }
        WeightDistribution::Dense => {
            let n = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
            let p = rng.gen_range(0.7..=0.95);
            generate(
                rng,
                GeneratorBuilder::new(n)
                    .with_weight_range(0.1, 100.0)
                    .with_edge_probability(p),
            )
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };
    MstFixture {
        graph,
        distribution,
    }
}

fn generate(rng: &mut SmallRng, builder: GeneratorBuilder) -> Graph {
    builder
        .build()
        .and_then(|generator| generator.generate(rng))
        .expect("fixture parameters must be valid")
}

/// Generates two to five components and relabels them into disjoint vertex
/// ranges of one graph.
fn generate_disconnected(rng: &mut SmallRng) -> Graph {
    let component_count = rng.gen_range(2..=5);
    let mut edges = Vec::new();
    let mut offset = 0;

    for _ in 0..component_count {
        let size = rng.gen_range(3..=12);
        let p = rng.gen_range(0.3..=0.8);
        let component = generate(
            rng,
            GeneratorBuilder::new(size)
                .with_weight_range(0.1, 100.0)
                .with_edge_probability(p),
        );
        edges.extend(component.edges().iter().map(|edge| {
            (edge.source() + offset, edge.target() + offset, edge.weight())
        }));
        offset += size;
    }

    Graph::new(offset, edges).expect("relabelled components must form a valid graph")
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        // Ties are where the engines are most likely to diverge.
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
