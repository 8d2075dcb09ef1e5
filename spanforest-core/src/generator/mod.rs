//! Random weighted graph generation.
//!
//! [`GeneratorBuilder`] validates every parameter up front so a bad input is
//! rejected before any randomness is consumed. The resulting
//! [`GraphGenerator`] draws all randomness from the RNG passed to
//! [`GraphGenerator::generate`]; the same seed and parameters always yield the
//! same graph.

mod pairs;

use std::fmt;

use rand::Rng;
use tracing::instrument;

use crate::{error::GeneratorError, graph::Graph};

/// Controls whether sampled weights keep their fractional part.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WeightKind {
    /// Weights are drawn uniformly from the real interval.
    #[default]
    Continuous,
    /// Weights are drawn uniformly and floored to whole numbers.
    Integral,
}

/// How many edges a generated graph receives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeDensity {
    /// Each unordered pair is included independently with this probability.
    Probability(f64),
    /// Exactly this many distinct pairs are sampled.
    Count(usize),
    /// An edge budget is drawn uniformly from `min..=max`, then that many
    /// distinct pairs are sampled.
    CountRange {
        /// Smallest edge budget.
        min: usize,
        /// Largest edge budget.
        max: usize,
    },
}

impl fmt::Display for EdgeDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Probability(probability) => write!(f, "p={probability}"),
            Self::Count(count) => write!(f, "m={count}"),
            Self::CountRange { min, max } => write!(f, "m={min}..={max}"),
        }
    }
}

/// A validated inclusive weight interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightRange {
    min: f64,
    max: f64,
}

impl WeightRange {
    /// Validates `[min, max]`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::NonFiniteWeight`] when a bound is NaN or
    /// infinite, [`GeneratorError::NegativeWeight`] when `min < 0`, and
    /// [`GeneratorError::InvertedWeightRange`] when `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, GeneratorError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeneratorError::NonFiniteWeight { min, max });
        }
        if min < 0.0 {
            return Err(GeneratorError::NegativeWeight { min });
        }
        if min > max {
            return Err(GeneratorError::InvertedWeightRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min(&self) -> f64 { self.min }

    /// Returns the upper bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max(&self) -> f64 { self.max }
}

impl fmt::Display for WeightRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Configures and constructs [`GraphGenerator`] instances.
///
/// Defaults mirror the classic benchmark setup: weights uniform on `[0, 1]`
/// and each pair included with probability `0.5`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spanforest_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new(6)
///     .with_weight_range(1.0, 10.0)
///     .with_edge_count(9)
///     .build()
///     .expect("parameters are valid");
/// let graph = generator
///     .generate(&mut SmallRng::seed_from_u64(42))
///     .expect("generation succeeds");
/// assert_eq!(graph.node_count(), 6);
/// assert_eq!(graph.edge_count(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorBuilder {
    vertex_count: usize,
    min_weight: f64,
    max_weight: f64,
    weight_kind: WeightKind,
    density: EdgeDensity,
}

impl GeneratorBuilder {
    /// Creates a builder for graphs with `vertex_count` vertices.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            min_weight: 0.0,
            max_weight: 1.0,
            weight_kind: WeightKind::Continuous,
            density: EdgeDensity::Probability(0.5),
        }
    }

    /// Overrides the inclusive weight interval.
    #[must_use]
    pub const fn with_weight_range(mut self, min: f64, max: f64) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Selects continuous or integral weights.
    #[must_use]
    pub const fn with_weight_kind(mut self, kind: WeightKind) -> Self {
        self.weight_kind = kind;
        self
    }

    /// Includes each unordered pair independently with `probability`.
    #[must_use]
    pub const fn with_edge_probability(mut self, probability: f64) -> Self {
        self.density = EdgeDensity::Probability(probability);
        self
    }

    /// Samples exactly `count` distinct pairs.
    #[must_use]
    pub const fn with_edge_count(mut self, count: usize) -> Self {
        self.density = EdgeDensity::Count(count);
        self
    }

    /// Draws the edge budget uniformly from `min..=max` per graph.
    #[must_use]
    pub const fn with_edge_count_range(mut self, min: usize, max: usize) -> Self {
        self.density = EdgeDensity::CountRange { min, max };
        self
    }

    /// Applies an already-chosen [`EdgeDensity`].
    #[must_use]
    pub const fn with_density(mut self, density: EdgeDensity) -> Self {
        self.density = density;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns the [`GeneratorError`] variant naming the first violated
    /// precondition: zero vertices, an unrepresentable pair count, a bad
    /// weight range, a probability outside `[0, 1]`, an inverted edge-count
    /// range, or an edge count above `n(n-1)/2`.
    pub fn build(self) -> Result<GraphGenerator, GeneratorError> {
        if self.vertex_count == 0 {
            return Err(GeneratorError::ZeroVertices);
        }
        let max_edges =
            Graph::max_edges(self.vertex_count).ok_or(GeneratorError::VertexCountOverflow {
                vertex_count: self.vertex_count,
            })?;
        let weights = WeightRange::new(self.min_weight, self.max_weight)?;
        validate_density(self.density, max_edges)?;

        Ok(GraphGenerator {
            vertex_count: self.vertex_count,
            max_edges,
            weights,
            weight_kind: self.weight_kind,
            density: self.density,
        })
    }
}

fn validate_density(density: EdgeDensity, max_edges: usize) -> Result<(), GeneratorError> {
    match density {
        EdgeDensity::Probability(probability) => {
            if (0.0..=1.0).contains(&probability) {
                Ok(())
            } else {
                Err(GeneratorError::InvalidProbability { probability })
            }
        }
        EdgeDensity::Count(count) => validate_count(count, max_edges),
        EdgeDensity::CountRange { min, max } => {
            if min > max {
                return Err(GeneratorError::InvertedEdgeCountRange { min, max });
            }
            validate_count(max, max_edges)
        }
    }
}

const fn validate_count(count: usize, max_edges: usize) -> Result<(), GeneratorError> {
    if count > max_edges {
        return Err(GeneratorError::InvalidEdgeCount {
            requested: count,
            max_edges,
        });
    }
    Ok(())
}

/// Produces random simple graphs from validated parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphGenerator {
    vertex_count: usize,
    max_edges: usize,
    weights: WeightRange,
    weight_kind: WeightKind,
    density: EdgeDensity,
}

impl GraphGenerator {
    /// Returns the vertex count of every generated graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns `n(n-1)/2` for the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_edges(&self) -> usize { self.max_edges }

    /// Returns the weight interval.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight_range(&self) -> WeightRange { self.weights }

    /// Returns whether weights are continuous or integral.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight_kind(&self) -> WeightKind { self.weight_kind }

    /// Returns the edge density mode.
    #[must_use]
    #[rustfmt::skip]
    pub const fn density(&self) -> EdgeDensity { self.density }

    /// Generates one graph using `rng` as the only source of randomness.
    ///
    /// Connectivity is not guaranteed.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidEdgeCount`] or
    /// [`GeneratorError::Graph`] only if the validated invariants were
    /// bypassed; a generator obtained from [`GeneratorBuilder::build`] does not
    /// fail in practice.
    #[instrument(
        name = "generator.generate",
        level = "debug",
        err,
        skip(self, rng),
        fields(vertices = self.vertex_count, density = %self.density),
    )]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, GeneratorError> {
        let edges = match self.density {
            EdgeDensity::Probability(probability) => self.sample_by_probability(rng, probability),
            EdgeDensity::Count(count) => self.sample_by_count(rng, count)?,
            EdgeDensity::CountRange { min, max } => {
                let count = rng.gen_range(min..=max);
                self.sample_by_count(rng, count)?
            }
        };
        Ok(Graph::new(self.vertex_count, edges)?)
    }

    fn sample_by_probability<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        probability: f64,
    ) -> Vec<(usize, usize, f64)> {
        let mut edges = Vec::new();
        for source in 0..self.vertex_count {
            for target in (source + 1)..self.vertex_count {
                if rng.gen_bool(probability) {
                    edges.push((source, target, self.sample_weight(rng)));
                }
            }
        }
        edges
    }

    fn sample_by_count<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<(usize, usize, f64)>, GeneratorError> {
        let pairs = pairs::sample_pairs(rng, self.vertex_count, self.max_edges, count)?;
        Ok(pairs
            .into_iter()
            .map(|(source, target)| (source, target, self.sample_weight(rng)))
            .collect())
    }

    fn sample_weight<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let weight = rng.gen_range(self.weights.min..=self.weights.max);
        match self.weight_kind {
            WeightKind::Continuous => weight,
            WeightKind::Integral => weight.floor(),
        }
    }
}
