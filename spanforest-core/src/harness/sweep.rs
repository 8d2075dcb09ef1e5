//! Size sweeps: one benchmark batch per vertex or edge count.

use tracing::{info, instrument};

use crate::error::BenchmarkError;
use crate::generator::{EdgeDensity, GeneratorBuilder, WeightKind};
use crate::mst::MstAlgorithm;

use super::{
    Benchmark, BenchmarkBuilder, BenchmarkReport, ExecutionStrategy, TimingSummary, mix_seed,
};

/// The dimension a sweep varies.
#[derive(Clone, Debug, PartialEq)]
pub enum SweepPlan {
    /// Vary the vertex count at a fixed edge probability.
    Vertices {
        /// Vertex count for each point.
        counts: Vec<usize>,
        /// Edge probability shared by every point.
        probability: f64,
    },
    /// Vary the exact edge count at a fixed vertex count.
    Edges {
        /// Vertex count shared by every point.
        vertex_count: usize,
        /// Edge count for each point.
        counts: Vec<usize>,
    },
}

impl SweepPlan {
    /// Number of points in the sweep.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Vertices { counts, .. } | Self::Edges { counts, .. } => counts.len(),
        }
    }

    /// Returns `true` when the sweep has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn generators(&self) -> Vec<GeneratorBuilder> {
        match self {
            Self::Vertices {
                counts,
                probability,
            } => counts
                .iter()
                .map(|&count| GeneratorBuilder::new(count).with_edge_probability(*probability))
                .collect(),
            Self::Edges {
                vertex_count,
                counts,
            } => counts
                .iter()
                .map(|&count| GeneratorBuilder::new(*vertex_count).with_edge_count(count))
                .collect(),
        }
    }
}

/// Configures and constructs a [`Sweep`].
///
/// # Examples
/// ```
/// use spanforest_core::{SweepBuilder, SweepPlan};
///
/// let points = SweepBuilder::new(SweepPlan::Vertices { counts: vec![4, 8], probability: 0.5 })
///     .with_trials(2)
///     .build()
///     .expect("sweep is valid")
///     .run()
///     .expect("sweep runs");
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].vertex_count(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct SweepBuilder {
    plan: SweepPlan,
    weights: (f64, f64),
    weight_kind: WeightKind,
    trials: usize,
    seed: u64,
    strategy: ExecutionStrategy,
}

impl SweepBuilder {
    /// Starts a builder for `plan` with weights in `[0, 1]`.
    #[must_use]
    pub const fn new(plan: SweepPlan) -> Self {
        Self {
            plan,
            weights: (0.0, 1.0),
            weight_kind: WeightKind::Continuous,
            trials: BenchmarkBuilder::DEFAULT_TRIALS,
            seed: 0,
            strategy: ExecutionStrategy::Sequential,
        }
    }

    /// Sets the weight range used at every point.
    #[must_use]
    pub const fn with_weight_range(mut self, min: f64, max: f64) -> Self {
        self.weights = (min, max);
        self
    }

    /// Sets whether weights are floored to integers.
    #[must_use]
    pub const fn with_weight_kind(mut self, kind: WeightKind) -> Self {
        self.weight_kind = kind;
        self
    }

    /// Sets the number of trials per point.
    #[must_use]
    pub const fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the sweep seed; each point derives its own batch seed from it.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Selects sequential or parallel trial execution within each point.
    #[must_use]
    pub const fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validates every point before any graph is generated.
    ///
    /// # Errors
    /// Returns [`BenchmarkError::EmptySweep`] for a plan with no points,
    /// [`BenchmarkError::Generator`] when any point has invalid generator
    /// parameters, and the [`BenchmarkBuilder::build`] errors otherwise.
    pub fn build(self) -> Result<Sweep, BenchmarkError> {
        if self.plan.is_empty() {
            return Err(BenchmarkError::EmptySweep);
        }
        let (min, max) = self.weights;
        let batches = self
            .plan
            .generators()
            .into_iter()
            .enumerate()
            .map(|(index, builder)| -> Result<Benchmark, BenchmarkError> {
                let generator = builder
                    .with_weight_range(min, max)
                    .with_weight_kind(self.weight_kind)
                    .build()?;
                BenchmarkBuilder::new(generator)
                    .with_trials(self.trials)
                    .with_seed(mix_seed(self.seed, index))
                    .with_execution_strategy(self.strategy)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Sweep { batches })
    }
}

/// A validated sweep: one benchmark per point.
#[derive(Clone, Debug)]
pub struct Sweep {
    batches: Vec<Benchmark>,
}

impl Sweep {
    /// Returns the per-point benchmarks in sweep order.
    #[must_use]
    #[rustfmt::skip]
    pub fn batches(&self) -> &[Benchmark] { &self.batches }

    /// Runs every point in order.
    ///
    /// # Errors
    /// Propagates the first [`Benchmark::run`] failure.
    #[instrument(name = "harness.sweep", err, skip(self), fields(points = self.batches.len()))]
    pub fn run(&self) -> Result<Vec<SweepPoint>, BenchmarkError> {
        let points = self
            .batches
            .iter()
            .map(|batch| batch.run().map(|report| SweepPoint::from_report(&report)))
            .collect::<Result<Vec<_>, _>>()?;
        info!(points = points.len(), "sweep completed");
        Ok(points)
    }
}

/// Aggregated timings for one sweep point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepPoint {
    vertex_count: usize,
    density: EdgeDensity,
    mean_edge_count: f64,
    kruskal: TimingSummary,
    prim: TimingSummary,
    faster: MstAlgorithm,
}

impl SweepPoint {
    /// Condenses a batch report into a sweep point.
    #[must_use]
    pub const fn from_report(report: &BenchmarkReport) -> Self {
        Self {
            vertex_count: report.vertex_count(),
            density: report.density(),
            mean_edge_count: report.mean_edge_count(),
            kruskal: *report.kruskal(),
            prim: *report.prim(),
            faster: report.faster(),
        }
    }

    /// Vertex count at this point.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Density setting at this point.
    #[must_use]
    #[rustfmt::skip]
    pub const fn density(&self) -> EdgeDensity { self.density }

    /// Mean edge count across the point's trials.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mean_edge_count(&self) -> f64 { self.mean_edge_count }

    /// Kruskal timings at this point.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kruskal(&self) -> &TimingSummary { &self.kruskal }

    /// Prim timings at this point.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prim(&self) -> &TimingSummary { &self.prim }

    /// Engine with the lower mean at this point.
    #[must_use]
    #[rustfmt::skip]
    pub const fn faster(&self) -> MstAlgorithm { self.faster }
}
