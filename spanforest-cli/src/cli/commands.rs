//! Argument parsing and command execution for the spanforest CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use spanforest_core::{
    BenchmarkBuilder, BenchmarkError, BenchmarkReport, EdgeDensity, ExecutionStrategy,
    GeneratorBuilder, GeneratorError, Graph, MinimumSpanningForest, MstAlgorithm, SweepBuilder,
    SweepPlan, SweepPoint, WeightKind,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_PROBABILITY: f64 = 0.5;
const DEFAULT_VERTEX_SWEEP: [usize; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];
const DEFAULT_EDGE_SWEEP: [usize; 10] = [10, 110, 210, 310, 410, 510, 610, 710, 810, 910];
const DEFAULT_EDGE_SWEEP_VERTICES: usize = 100;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanforest",
    about = "Generate random weighted graphs and compare Kruskal with Prim."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Time both engines over a batch of random graphs.
    Bench(BenchCommand),
    /// Generate one graph and print it with its spanning forest.
    Mst(MstCommand),
    /// Benchmark across a range of vertex or edge counts.
    #[command(subcommand)]
    Sweep(SweepCommand),
}

/// Options accepted by the `bench` command.
#[derive(Debug, Args, Clone)]
pub struct BenchCommand {
    /// Number of vertices in every generated graph.
    #[arg(long, short = 'n')]
    pub vertices: usize,

    /// Weight sampling options.
    #[command(flatten)]
    pub weights: WeightArgs,

    /// Edge density options.
    #[command(flatten)]
    pub density: DensityArgs,

    /// Trial scheduling options.
    #[command(flatten)]
    pub run: RunArgs,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Number of vertices in the generated graph.
    #[arg(long, short = 'n')]
    pub vertices: usize,

    /// Weight sampling options.
    #[command(flatten)]
    pub weights: WeightArgs,

    /// Edge density options.
    #[command(flatten)]
    pub density: DensityArgs,

    /// Engine to run.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,

    /// Seed for the graph generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

/// Sweep dimensions.
#[derive(Debug, Subcommand, Clone)]
pub enum SweepCommand {
    /// Vary the vertex count at a fixed edge probability.
    Vertices(VertexSweepArgs),
    /// Vary the exact edge count at a fixed vertex count.
    Edges(EdgeSweepArgs),
}

/// Options accepted by `sweep vertices`.
#[derive(Debug, Args, Clone)]
pub struct VertexSweepArgs {
    /// Comma-separated vertex counts, one benchmark batch each.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_VERTEX_SWEEP)]
    pub counts: Vec<usize>,

    /// Edge probability shared by every point.
    #[arg(long, default_value_t = DEFAULT_PROBABILITY, allow_negative_numbers = true)]
    pub probability: f64,

    /// Weight sampling options.
    #[command(flatten)]
    pub weights: WeightArgs,

    /// Trial scheduling options.
    #[command(flatten)]
    pub run: RunArgs,
}

/// Options accepted by `sweep edges`.
#[derive(Debug, Args, Clone)]
pub struct EdgeSweepArgs {
    /// Vertex count shared by every point.
    #[arg(long, short = 'n', default_value_t = DEFAULT_EDGE_SWEEP_VERTICES)]
    pub vertices: usize,

    /// Comma-separated edge counts, one benchmark batch each.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_EDGE_SWEEP)]
    pub counts: Vec<usize>,

    /// Weight sampling options.
    #[command(flatten)]
    pub weights: WeightArgs,

    /// Trial scheduling options.
    #[command(flatten)]
    pub run: RunArgs,
}

/// Edge weight sampling options.
#[derive(Debug, Args, Clone, Copy, PartialEq)]
pub struct WeightArgs {
    /// Smallest edge weight.
    #[arg(long = "min-weight", default_value_t = 0.0, allow_negative_numbers = true)]
    pub min: f64,

    /// Largest edge weight.
    #[arg(long = "max-weight", default_value_t = 1.0, allow_negative_numbers = true)]
    pub max: f64,

    /// Floor sampled weights to whole numbers.
    #[arg(long)]
    pub integral: bool,
}

impl WeightArgs {
    fn kind(self) -> WeightKind {
        if self.integral {
            WeightKind::Integral
        } else {
            WeightKind::Continuous
        }
    }
}

/// Edge density options; defaults to probability 0.5.
#[derive(Debug, Args, Clone, Copy, PartialEq, Default)]
pub struct DensityArgs {
    /// Include each vertex pair independently with this probability.
    #[arg(
        long,
        allow_negative_numbers = true,
        conflicts_with_all = ["edges", "edges_min", "edges_max"]
    )]
    pub probability: Option<f64>,

    /// Sample exactly this many distinct edges.
    #[arg(long, conflicts_with_all = ["edges_min", "edges_max"])]
    pub edges: Option<usize>,

    /// Lower bound of a uniformly drawn edge count.
    #[arg(long = "edges-min", requires = "edges_max")]
    pub edges_min: Option<usize>,

    /// Upper bound of a uniformly drawn edge count.
    #[arg(long = "edges-max", requires = "edges_min")]
    pub edges_max: Option<usize>,
}

impl DensityArgs {
    /// Resolves the flags into the generator's density mode.
    #[must_use]
    pub fn density(&self) -> EdgeDensity {
        match (self.edges, self.edges_min, self.edges_max) {
            (Some(count), _, _) => EdgeDensity::Count(count),
            (None, Some(min), Some(max)) => EdgeDensity::CountRange { min, max },
            _ => EdgeDensity::Probability(self.probability.unwrap_or(DEFAULT_PROBABILITY)),
        }
    }
}

/// Trial scheduling options shared by `bench` and `sweep`.
#[derive(Debug, Args, Clone, Copy, PartialEq, Eq)]
pub struct RunArgs {
    /// Trials per benchmark batch.
    #[arg(long, default_value_t = BenchmarkBuilder::DEFAULT_TRIALS)]
    pub trials: usize,

    /// Seed from which every trial graph is derived.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Run independent trials concurrently.
    #[arg(long)]
    pub parallel: bool,
}

impl RunArgs {
    fn strategy(self) -> ExecutionStrategy {
        if self.parallel {
            ExecutionStrategy::Parallel
        } else {
            ExecutionStrategy::Sequential
        }
    }
}

/// Engine selection for the `mst` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Kruskal only.
    Kruskal,
    /// Prim only.
    Prim,
    /// Kruskal then Prim.
    Both,
}

impl AlgorithmChoice {
    fn algorithms(self) -> &'static [MstAlgorithm] {
        match self {
            Self::Kruskal => &[MstAlgorithm::Kruskal],
            Self::Prim => &[MstAlgorithm::Prim],
            Self::Both => &MstAlgorithm::ALL,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CliError {
    /// Generator parameters were rejected.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// Benchmark configuration or execution failed.
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),
}

impl CliError {
    /// Returns the stable code of the underlying core error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Generator(error) => error.code().as_str(),
            Self::Benchmark(error) => error.code().as_str(),
        }
    }

    /// Returns the code of the error nested one level down, if any.
    #[must_use]
    pub fn nested_code(&self) -> Option<&'static str> {
        match self {
            Self::Generator(error) => error.graph_code().map(|code| code.as_str()),
            Self::Benchmark(error) => error.generator_code().map(|code| code.as_str()),
        }
    }
}

/// A graph together with the forests computed for it.
#[derive(Debug, Clone)]
pub struct MstOutput {
    /// The generated graph.
    pub graph: Graph,
    /// One forest per requested engine, in request order.
    pub forests: Vec<(MstAlgorithm, MinimumSpanningForest)>,
}

/// Result of executing a CLI command, ready for rendering.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// Timing records and aggregates from `bench`.
    Bench(BenchmarkReport),
    /// Graph and forests from `mst`.
    Mst(MstOutput),
    /// Per-point aggregates from `sweep`.
    Sweep(Vec<SweepPoint>),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parameters are rejected or a benchmark fails.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use spanforest_cli::cli::{Cli, CommandOutput, run_cli};
///
/// let cli = Cli::parse_from(["spanforest", "bench", "-n", "8", "--trials", "2"]);
/// let CommandOutput::Bench(report) = run_cli(cli).expect("bench must run") else {
///     panic!("bench returns a report");
/// };
/// assert_eq!(report.records().len(), 4);
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Bench(command) => {
            span.record("command", field::display("bench"));
            run_bench(&command).map(CommandOutput::Bench)
        }
        Command::Mst(command) => {
            span.record("command", field::display("mst"));
            run_mst(&command).map(CommandOutput::Mst)
        }
        Command::Sweep(command) => {
            span.record("command", field::display("sweep"));
            run_sweep(command).map(CommandOutput::Sweep)
        }
    }
}

fn generator_builder(
    vertices: usize,
    weights: WeightArgs,
    density: &DensityArgs,
) -> GeneratorBuilder {
    GeneratorBuilder::new(vertices)
        .with_weight_range(weights.min, weights.max)
        .with_weight_kind(weights.kind())
        .with_density(density.density())
}

pub(super) fn run_bench(command: &BenchCommand) -> Result<BenchmarkReport, CliError> {
    let generator =
        generator_builder(command.vertices, command.weights, &command.density).build()?;
    let report = BenchmarkBuilder::new(generator)
        .with_trials(command.run.trials)
        .with_seed(command.run.seed)
        .with_execution_strategy(command.run.strategy())
        .build()?
        .run()?;
    info!(faster = %report.faster(), "bench command completed");
    Ok(report)
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(vertices = command.vertices, seed = command.seed, algorithm = ?command.algorithm),
)]
pub(super) fn run_mst(command: &MstCommand) -> Result<MstOutput, CliError> {
    let generator =
        generator_builder(command.vertices, command.weights, &command.density).build()?;
    let graph = generator.generate(&mut SmallRng::seed_from_u64(command.seed))?;
    let forests = command
        .algorithm
        .algorithms()
        .iter()
        .map(|&algorithm| (algorithm, algorithm.compute(&graph)))
        .collect();
    Ok(MstOutput { graph, forests })
}

pub(super) fn run_sweep(command: SweepCommand) -> Result<Vec<SweepPoint>, CliError> {
    let (plan, weights, run) = match command {
        SweepCommand::Vertices(args) => (
            SweepPlan::Vertices {
                counts: args.counts,
                probability: args.probability,
            },
            args.weights,
            args.run,
        ),
        SweepCommand::Edges(args) => (
            SweepPlan::Edges {
                vertex_count: args.vertices,
                counts: args.counts,
            },
            args.weights,
            args.run,
        ),
    };
    let points = SweepBuilder::new(plan)
        .with_weight_range(weights.min, weights.max)
        .with_weight_kind(weights.kind())
        .with_trials(run.trials)
        .with_seed(run.seed)
        .with_execution_strategy(run.strategy())
        .build()?
        .run()?;
    Ok(points)
}
