//! Spanforest core library.
//!
//! Random weighted graph generation, Kruskal and Prim minimum spanning forest
//! engines, and a harness that times both engines on identical graphs.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generator;
mod graph;
mod harness;
mod mst;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{
        BenchmarkError, BenchmarkErrorCode, EdgeDefect, GeneratorError, GeneratorErrorCode,
        GraphError, GraphErrorCode,
    },
    generator::{EdgeDensity, GeneratorBuilder, GraphGenerator, WeightKind, WeightRange},
    graph::{Edge, Graph, Neighbour},
    harness::{
        Benchmark, BenchmarkBuilder, BenchmarkReport, ExecutionStrategy, Sweep, SweepBuilder,
        SweepPlan, SweepPoint, TimingRecord, TimingSummary,
    },
    mst::{MinimumSpanningForest, MstAlgorithm, kruskal, prim},
    union_find::DisjointSet,
};
