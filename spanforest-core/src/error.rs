//! Error types for the spanforest core library.
//!
//! Each error enum exposes a stable, machine-readable code so callers can log
//! and match failures without depending on display strings.

use std::fmt;

use thiserror::Error;

use crate::harness::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Why an edge was rejected by [`crate::Graph::new`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeDefect {
    /// Both endpoints name the same vertex.
    SelfLoop,
    /// At least one endpoint is not below the vertex count.
    OutOfBounds,
}

impl fmt::Display for EdgeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop => f.write_str("self-loop"),
            Self::OutOfBounds => f.write_str("endpoint out of bounds"),
        }
    }
}

/// Errors raised while constructing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A graph needs at least one vertex.
    #[error("a graph must contain at least one vertex")]
    EmptyGraph,
    /// An edge was a self-loop or referenced a vertex outside `0..node_count`.
    #[error("edge ({left}, {right}) is invalid for {node_count} vertices: {defect}")]
    InvalidEdge {
        /// First endpoint as supplied.
        left: usize,
        /// Second endpoint as supplied.
        right: usize,
        /// Number of vertices in the graph under construction.
        node_count: usize,
        /// The violated edge invariant.
        defect: EdgeDefect,
    },
    /// The same unordered pair appeared twice.
    #[error("edge ({left}, {right}) appears more than once")]
    DuplicateEdge {
        /// Smaller endpoint of the repeated pair.
        left: usize,
        /// Larger endpoint of the repeated pair.
        right: usize,
    },
    /// An edge weight was negative, NaN or infinite.
    #[error("edge ({left}, {right}) has invalid weight {weight}")]
    InvalidWeight {
        /// First endpoint as supplied.
        left: usize,
        /// Second endpoint as supplied.
        right: usize,
        /// The offending weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph needs at least one vertex.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge was a self-loop or out of bounds.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_INVALID_EDGE",
        /// The same unordered pair appeared twice.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// An edge weight was negative or non-finite.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
    }
}

/// Errors raised while validating generator parameters or sampling a graph.
///
/// Every parameter precondition has its own variant so the boundary layer can
/// report exactly which input was rejected.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// The vertex count was zero.
    #[error("vertex count must be at least 1")]
    ZeroVertices,
    /// The number of vertex pairs does not fit in `usize`.
    #[error("vertex count {vertex_count} is too large to enumerate its vertex pairs")]
    VertexCountOverflow {
        /// The rejected vertex count.
        vertex_count: usize,
    },
    /// The edge-inclusion probability was outside `[0, 1]` or NaN.
    #[error("edge probability must lie in [0, 1] (got {probability})")]
    InvalidProbability {
        /// The rejected probability.
        probability: f64,
    },
    /// A weight bound was NaN or infinite.
    #[error("weight bounds must be finite (got [{min}, {max}])")]
    NonFiniteWeight {
        /// Lower weight bound.
        min: f64,
        /// Upper weight bound.
        max: f64,
    },
    /// The lower weight bound was negative.
    #[error("weight bounds must be non-negative (got minimum {min})")]
    NegativeWeight {
        /// Lower weight bound.
        min: f64,
    },
    /// The lower weight bound exceeded the upper bound.
    #[error("minimum weight {min} exceeds maximum weight {max}")]
    InvertedWeightRange {
        /// Lower weight bound.
        min: f64,
        /// Upper weight bound.
        max: f64,
    },
    /// The lower edge-count bound exceeded the upper bound.
    #[error("minimum edge count {min} exceeds maximum edge count {max}")]
    InvertedEdgeCountRange {
        /// Lower edge-count bound.
        min: usize,
        /// Upper edge-count bound.
        max: usize,
    },
    /// The requested edge count exceeds `n(n-1)/2`.
    #[error("edge count {requested} exceeds the {max_edges} possible edges")]
    InvalidEdgeCount {
        /// The requested number of edges.
        requested: usize,
        /// Number of distinct vertex pairs available.
        max_edges: usize,
    },
    /// Graph construction rejected the sampled edges.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The vertex count was zero.
        ZeroVertices => ZeroVertices => "GENERATOR_ZERO_VERTICES",
        /// The number of vertex pairs does not fit in `usize`.
        VertexCountOverflow => VertexCountOverflow { .. } => "GENERATOR_VERTEX_COUNT_OVERFLOW",
        /// The edge-inclusion probability was out of range.
        InvalidProbability => InvalidProbability { .. } => "GENERATOR_INVALID_PROBABILITY",
        /// A weight bound was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GENERATOR_NON_FINITE_WEIGHT",
        /// The lower weight bound was negative.
        NegativeWeight => NegativeWeight { .. } => "GENERATOR_NEGATIVE_WEIGHT",
        /// The lower weight bound exceeded the upper bound.
        InvertedWeightRange => InvertedWeightRange { .. } => "GENERATOR_INVERTED_WEIGHT_RANGE",
        /// The lower edge-count bound exceeded the upper bound.
        InvertedEdgeCountRange => InvertedEdgeCountRange { .. } => "GENERATOR_INVERTED_EDGE_COUNT_RANGE",
        /// The requested edge count exceeds `n(n-1)/2`.
        InvalidEdgeCount => InvalidEdgeCount { .. } => "GENERATOR_INVALID_EDGE_COUNT",
        /// Graph construction rejected the sampled edges.
        GraphFailure => Graph(..) => "GENERATOR_GRAPH_FAILURE",
    }
}

impl GeneratorError {
    /// Returns `true` for the malformed-input variants that are reported
    /// before any graph is sampled.
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        !matches!(self, Self::Graph(_))
    }

    /// Retrieve the inner [`GraphErrorCode`] when graph construction failed.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Errors raised while configuring or running a benchmark batch.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BenchmarkError {
    /// A benchmark needs at least one trial.
    #[error("trial count must be at least 1")]
    ZeroTrials,
    /// A sweep needs at least one point.
    #[error("sweep must contain at least one point")]
    EmptySweep,
    /// The requested execution strategy is not compiled into this build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied.
        requested: ExecutionStrategy,
    },
    /// Graph generation failed; the whole batch is aborted.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
}

define_error_codes! {
    /// Stable codes describing [`BenchmarkError`] variants.
    enum BenchmarkErrorCode for BenchmarkError {
        /// A benchmark needs at least one trial.
        ZeroTrials => ZeroTrials => "BENCHMARK_ZERO_TRIALS",
        /// A sweep needs at least one point.
        EmptySweep => EmptySweep => "BENCHMARK_EMPTY_SWEEP",
        /// The requested execution strategy is unavailable.
        BackendUnavailable => BackendUnavailable { .. } => "BENCHMARK_BACKEND_UNAVAILABLE",
        /// Graph generation failed.
        GeneratorFailure => Generator(..) => "BENCHMARK_GENERATOR_FAILURE",
    }
}

impl BenchmarkError {
    /// Retrieve the inner [`GeneratorErrorCode`] when generation failed.
    #[must_use]
    pub const fn generator_code(&self) -> Option<GeneratorErrorCode> {
        match self {
            Self::Generator(error) => Some(error.code()),
            _ => None,
        }
    }
}
