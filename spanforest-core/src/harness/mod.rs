//! Benchmark harness timing both MST engines on identical graphs.
//!
//! Each trial seeds a fresh `SmallRng`, generates one [`Graph`], and hands the
//! same instance to Kruskal and then Prim. Only the engine call is timed.
//! Trials share nothing mutable; with [`ExecutionStrategy::Parallel`] they are
//! spread across the rayon pool and collected in trial order.

mod seed;
mod stats;
mod sweep;

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info, instrument, warn};

use crate::error::BenchmarkError;
use crate::generator::{EdgeDensity, GraphGenerator, WeightRange};
use crate::graph::Graph;
use crate::mst::{MinimumSpanningForest, MstAlgorithm};

pub(crate) use self::seed::mix_seed;
pub use self::stats::TimingSummary;
pub use self::sweep::{Sweep, SweepBuilder, SweepPlan, SweepPoint};

/// Relative tolerance used when cross-checking forest weights.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Selects how benchmark trials are scheduled.
///
/// # Examples
/// ```
/// use spanforest_core::ExecutionStrategy;
///
/// assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::Sequential);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ExecutionStrategy {
    /// Run trials one after another on the calling thread.
    #[default]
    Sequential,
    /// Run independent trials concurrently on the rayon pool. Requires the
    /// `parallel` feature.
    Parallel,
}

impl ExecutionStrategy {
    /// Returns `true` when this build can execute the strategy.
    #[must_use]
    pub const fn is_available(self) -> bool {
        match self {
            Self::Sequential => true,
            Self::Parallel => cfg!(feature = "parallel"),
        }
    }
}

/// Configures and constructs a [`Benchmark`].
///
/// # Examples
/// ```
/// use spanforest_core::{BenchmarkBuilder, GeneratorBuilder};
///
/// let generator = GeneratorBuilder::new(12).build().expect("generator is valid");
/// let report = BenchmarkBuilder::new(generator)
///     .with_trials(3)
///     .with_seed(42)
///     .build()
///     .expect("benchmark is valid")
///     .run()
///     .expect("benchmark runs");
/// assert_eq!(report.records().len(), 6);
/// assert_eq!(report.kruskal().samples(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct BenchmarkBuilder {
    generator: GraphGenerator,
    trials: usize,
    seed: u64,
    strategy: ExecutionStrategy,
}

impl BenchmarkBuilder {
    /// Trials per batch unless overridden.
    pub const DEFAULT_TRIALS: usize = 10;

    /// Starts a builder for batches drawn from `generator`.
    #[must_use]
    pub const fn new(generator: GraphGenerator) -> Self {
        Self {
            generator,
            trials: Self::DEFAULT_TRIALS,
            seed: 0,
            strategy: ExecutionStrategy::Sequential,
        }
    }

    /// Sets the number of trials.
    #[must_use]
    pub const fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the batch seed from which every trial seed is derived.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Selects sequential or parallel trial execution.
    #[must_use]
    pub const fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured trial count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn trials(&self) -> usize { self.trials }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`BenchmarkError::ZeroTrials`] when no trials were requested and
    /// [`BenchmarkError::BackendUnavailable`] when the execution strategy is
    /// not compiled into this build.
    pub fn build(self) -> Result<Benchmark, BenchmarkError> {
        if self.trials == 0 {
            return Err(BenchmarkError::ZeroTrials);
        }
        if !self.strategy.is_available() {
            return Err(BenchmarkError::BackendUnavailable {
                requested: self.strategy,
            });
        }
        Ok(Benchmark {
            generator: self.generator,
            trials: self.trials,
            seed: self.seed,
            strategy: self.strategy,
        })
    }
}

/// A validated benchmark batch.
#[derive(Clone, Debug)]
pub struct Benchmark {
    generator: GraphGenerator,
    trials: usize,
    seed: u64,
    strategy: ExecutionStrategy,
}

impl Benchmark {
    /// Returns the generator each trial draws from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn generator(&self) -> &GraphGenerator { &self.generator }

    /// Returns the number of trials.
    #[must_use]
    #[rustfmt::skip]
    pub const fn trials(&self) -> usize { self.trials }

    /// Returns the batch seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Returns the execution strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn execution_strategy(&self) -> ExecutionStrategy { self.strategy }

    /// Runs every trial and aggregates the timings.
    ///
    /// Records are ordered by trial, Kruskal before Prim within a trial,
    /// regardless of the execution strategy.
    ///
    /// # Errors
    /// Returns [`BenchmarkError::Generator`] if any trial fails to generate
    /// its graph; the batch stops at the first failure. Returns
    /// [`BenchmarkError::BackendUnavailable`] if parallel execution was
    /// requested in a build without the `parallel` feature.
    #[instrument(
        name = "harness.run",
        err,
        skip(self),
        fields(
            vertices = self.generator.vertex_count(),
            density = %self.generator.density(),
            trials = self.trials,
            strategy = ?self.strategy,
        ),
    )]
    pub fn run(&self) -> Result<BenchmarkReport, BenchmarkError> {
        let outcomes = self.run_trials()?;

        let edge_total: usize = outcomes.iter().map(|outcome| outcome.edge_count).sum();
        let records: Vec<TimingRecord> = outcomes
            .into_iter()
            .flat_map(|outcome| outcome.records)
            .collect();

        let kruskal = summarise(&records, MstAlgorithm::Kruskal);
        let prim = summarise(&records, MstAlgorithm::Prim);
        let faster = stats::faster(&kruskal, &prim);
        let mean_edge_count = edge_total as f64 / self.trials as f64;

        info!(
            trials = self.trials,
            mean_edges = mean_edge_count,
            kruskal_mean_ns = kruskal.mean().as_nanos() as u64,
            prim_mean_ns = prim.mean().as_nanos() as u64,
            faster = %faster,
            "benchmark completed",
        );

        Ok(BenchmarkReport {
            vertex_count: self.generator.vertex_count(),
            weight_range: self.generator.weight_range(),
            density: self.generator.density(),
            trials: self.trials,
            mean_edge_count,
            records,
            kruskal,
            prim,
            faster,
        })
    }

    fn run_trials(&self) -> Result<Vec<TrialOutcome>, BenchmarkError> {
        match self.strategy {
            ExecutionStrategy::Sequential => (0..self.trials)
                .map(|trial| self.run_trial(trial))
                .collect(),
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Parallel => {
                use rayon::prelude::*;

                (0..self.trials)
                    .into_par_iter()
                    .map(|trial| self.run_trial(trial))
                    .collect()
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => Err(BenchmarkError::BackendUnavailable {
                requested: ExecutionStrategy::Parallel,
            }),
        }
    }

    fn run_trial(&self, trial: usize) -> Result<TrialOutcome, BenchmarkError> {
        let mut rng = SmallRng::seed_from_u64(mix_seed(self.seed, trial));
        let graph = self.generator.generate(&mut rng)?;

        let (kruskal_elapsed, kruskal_forest) = measure(MstAlgorithm::Kruskal, &graph);
        let (prim_elapsed, prim_forest) = measure(MstAlgorithm::Prim, &graph);

        if !weights_agree(kruskal_forest.total_weight(), prim_forest.total_weight()) {
            warn!(
                trial,
                kruskal_weight = kruskal_forest.total_weight(),
                prim_weight = prim_forest.total_weight(),
                "forest weights disagree",
            );
        }
        debug!(
            trial,
            edges = graph.edge_count(),
            components = kruskal_forest.component_count(),
            kruskal_ns = kruskal_elapsed.as_nanos() as u64,
            prim_ns = prim_elapsed.as_nanos() as u64,
            "trial completed",
        );

        let record = |algorithm, elapsed, forest: &MinimumSpanningForest| TimingRecord {
            algorithm,
            trial,
            vertex_count: graph.node_count(),
            edge_count: graph.edge_count(),
            weight_range: self.generator.weight_range(),
            density: self.generator.density(),
            elapsed,
            forest_weight: forest.total_weight(),
        };
        Ok(TrialOutcome {
            edge_count: graph.edge_count(),
            records: [
                record(MstAlgorithm::Kruskal, kruskal_elapsed, &kruskal_forest),
                record(MstAlgorithm::Prim, prim_elapsed, &prim_forest),
            ],
        })
    }
}

struct TrialOutcome {
    edge_count: usize,
    records: [TimingRecord; 2],
}

/// Times a single engine call, excluding generation and reporting.
fn measure(algorithm: MstAlgorithm, graph: &Graph) -> (Duration, MinimumSpanningForest) {
    let start = Instant::now();
    let forest = algorithm.compute(black_box(graph));
    let elapsed = start.elapsed();
    (elapsed, black_box(forest))
}

fn weights_agree(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= WEIGHT_TOLERANCE * scale
}

fn summarise(records: &[TimingRecord], algorithm: MstAlgorithm) -> TimingSummary {
    TimingSummary::from_durations(
        algorithm,
        records
            .iter()
            .filter(|record| record.algorithm == algorithm)
            .map(TimingRecord::elapsed),
    )
}

/// One engine's timing on one trial graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingRecord {
    algorithm: MstAlgorithm,
    trial: usize,
    vertex_count: usize,
    edge_count: usize,
    weight_range: WeightRange,
    density: EdgeDensity,
    elapsed: Duration,
    forest_weight: f64,
}

impl TimingRecord {
    /// Engine that was timed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> MstAlgorithm { self.algorithm }

    /// Zero-based trial index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn trial(&self) -> usize { self.trial }

    /// Vertex count of the trial graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Edge count of the trial graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Weight range the graph was drawn with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight_range(&self) -> WeightRange { self.weight_range }

    /// Edge probability or count target the graph was drawn with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn density(&self) -> EdgeDensity { self.density }

    /// Wall-clock time spent inside the engine.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Total weight of the forest the engine returned.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest_weight(&self) -> f64 { self.forest_weight }
}

/// Every timing record of a batch plus per-engine aggregates.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkReport {
    vertex_count: usize,
    weight_range: WeightRange,
    density: EdgeDensity,
    trials: usize,
    mean_edge_count: f64,
    records: Vec<TimingRecord>,
    kruskal: TimingSummary,
    prim: TimingSummary,
    faster: MstAlgorithm,
}

impl BenchmarkReport {
    /// Vertex count shared by every trial graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Weight range shared by every trial graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight_range(&self) -> WeightRange { self.weight_range }

    /// Density setting shared by every trial graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn density(&self) -> EdgeDensity { self.density }

    /// Number of trials run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn trials(&self) -> usize { self.trials }

    /// Mean edge count of the generated graphs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mean_edge_count(&self) -> f64 { self.mean_edge_count }

    /// Per-trial records, ordered by trial then engine.
    #[must_use]
    #[rustfmt::skip]
    pub fn records(&self) -> &[TimingRecord] { &self.records }

    /// Records for a single engine, in trial order.
    pub fn records_for(&self, algorithm: MstAlgorithm) -> impl Iterator<Item = &TimingRecord> {
        self.records
            .iter()
            .filter(move |record| record.algorithm == algorithm)
    }

    /// Aggregate timings for Kruskal.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kruskal(&self) -> &TimingSummary { &self.kruskal }

    /// Aggregate timings for Prim.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prim(&self) -> &TimingSummary { &self.prim }

    /// Aggregate timings for `algorithm`.
    #[must_use]
    pub const fn summary(&self, algorithm: MstAlgorithm) -> &TimingSummary {
        match algorithm {
            MstAlgorithm::Kruskal => &self.kruskal,
            MstAlgorithm::Prim => &self.prim,
        }
    }

    /// Engine with the lower mean time; Kruskal on a tie.
    #[must_use]
    #[rustfmt::skip]
    pub const fn faster(&self) -> MstAlgorithm { self.faster }
}
