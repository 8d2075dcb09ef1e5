//! End-to-end scenarios: generate, compute both forests, compare.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rstest::rstest;
use spanforest_core::{
    DisjointSet, EdgeDensity, GeneratorBuilder, Graph, MstAlgorithm, WeightKind, kruskal, prim,
};

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}

#[rstest]
#[case::sparse(EdgeDensity::Probability(0.05))]
#[case::half(EdgeDensity::Probability(0.5))]
#[case::complete(EdgeDensity::Probability(1.0))]
#[case::exact(EdgeDensity::Count(120))]
#[case::ranged(EdgeDensity::CountRange { min: 10, max: 300 })]
#[case::empty(EdgeDensity::Count(0))]
fn generated_graphs_yield_equal_weight_forests(#[case] density: EdgeDensity) {
    let generator = GeneratorBuilder::new(40)
        .with_weight_range(0.0, 50.0)
        .with_density(density)
        .build()
        .expect("generator parameters are valid");

    for seed in 0..8 {
        let graph = generator
            .generate(&mut SmallRng::seed_from_u64(seed))
            .expect("generation must succeed");
        let by_kruskal = kruskal(&graph);
        let by_prim = prim(&graph);

        assert!(close(by_kruskal.total_weight(), by_prim.total_weight()));
        let components = graph.component_count();
        for forest in [&by_kruskal, &by_prim] {
            assert_eq!(forest.component_count(), components);
            assert_eq!(forest.edge_count(), graph.node_count() - components);

            let mut sets = DisjointSet::make_set(graph.node_count());
            for edge in forest.edges() {
                assert!(graph.contains_edge(edge.source(), edge.target()));
                assert!(sets.union(edge.source(), edge.target()), "cycle in forest");
            }
        }
    }
}

#[test]
fn integral_weights_give_integral_totals() {
    let generator = GeneratorBuilder::new(25)
        .with_weight_range(1.0, 9.0)
        .with_weight_kind(WeightKind::Integral)
        .with_edge_probability(0.6)
        .build()
        .expect("generator parameters are valid");
    let graph = generator
        .generate(&mut SmallRng::seed_from_u64(17))
        .expect("generation must succeed");
    for algorithm in MstAlgorithm::ALL {
        let total = algorithm.compute(&graph).total_weight();
        assert_eq!(total.fract(), 0.0, "{algorithm} total {total}");
    }
}

#[test]
fn square_scenario_through_public_api() {
    let graph = Graph::new(4, [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (0, 3, 4.0)])
        .expect("graph is valid");
    for algorithm in MstAlgorithm::ALL {
        let forest = algorithm.compute(&graph);
        let pairs: Vec<_> = forest.edges().iter().map(|edge| edge.endpoints()).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(forest.total_weight(), 6.0);
    }
}

#[test]
fn engines_leave_the_graph_untouched() {
    let graph = Graph::new(5, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0), (3, 4, 5.0)])
        .expect("graph is valid");
    let before = graph.clone();
    let _ = kruskal(&graph);
    let _ = prim(&graph);
    assert_eq!(graph, before);
}
