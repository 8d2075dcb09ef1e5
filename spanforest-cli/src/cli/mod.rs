//! Command-line interface for generating graphs, computing spanning forests,
//! and benchmarking Kruskal against Prim.

mod commands;
mod render;

pub use commands::{
    AlgorithmChoice, BenchCommand, Cli, CliError, Command, CommandOutput, DensityArgs,
    EdgeSweepArgs, MstCommand, MstOutput, RunArgs, SweepCommand, VertexSweepArgs, WeightArgs,
    run_cli,
};
pub use render::{render_forest, render_output, render_report, render_sweep};
