//! Plain-text rendering of command output.
//!
//! Reports are `key: value` lines; graph and forest edges are `u v weight`
//! lines so a plotting tool can consume them directly.

use std::io::{self, Write};
use std::time::Duration;

use spanforest_core::{BenchmarkReport, Edge, SweepPoint, TimingSummary};

use super::commands::{CommandOutput, MstOutput};

/// Renders any command output to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_output(output: &CommandOutput, writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Bench(report) => render_report(report, writer),
        CommandOutput::Mst(mst) => render_forest(mst, writer),
        CommandOutput::Sweep(points) => render_sweep(points, writer),
    }
}

/// Renders every timing record followed by the per-engine aggregates.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// use spanforest_cli::cli::render_report;
/// use spanforest_core::{BenchmarkBuilder, GeneratorBuilder};
///
/// let generator = GeneratorBuilder::new(6).build().expect("generator is valid");
/// let report = BenchmarkBuilder::new(generator)
///     .with_trials(1)
///     .build()
///     .and_then(|benchmark| benchmark.run())
///     .expect("benchmark runs");
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer).expect("writing to a Vec succeeds");
/// let text = String::from_utf8(buffer).expect("output is UTF-8");
/// assert!(text.starts_with("vertices: 6\n"));
/// assert!(text.contains("faster: "));
/// ```
pub fn render_report(report: &BenchmarkReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "vertices: {}", report.vertex_count())?;
    writeln!(writer, "weight range: {}", report.weight_range())?;
    writeln!(writer, "density: {}", report.density())?;
    writeln!(writer, "trials: {}", report.trials())?;
    writeln!(writer, "mean edges: {:.1}", report.mean_edge_count())?;
    for record in report.records() {
        let key = format!("trial.{}.{}", record.trial(), record.algorithm());
        writeln!(writer, "{key}.seconds: {}", seconds(record.elapsed()))?;
        writeln!(writer, "{key}.edges: {}", record.edge_count())?;
        writeln!(writer, "{key}.forest_weight: {}", record.forest_weight())?;
    }
    write_summary(&mut writer, report.kruskal())?;
    write_summary(&mut writer, report.prim())?;
    writeln!(writer, "faster: {}", report.faster())
}

/// Renders the graph's edges and then each forest.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_forest(output: &MstOutput, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "vertices: {}", output.graph.node_count())?;
    writeln!(writer, "graph edges: {}", output.graph.edge_count())?;
    write_edges(&mut writer, output.graph.edges())?;
    for (algorithm, forest) in &output.forests {
        writeln!(
            writer,
            "{algorithm}.total_weight: {}",
            forest.total_weight()
        )?;
        writeln!(
            writer,
            "{algorithm}.components: {}",
            forest.component_count()
        )?;
        writeln!(writer, "{algorithm}.forest_edges: {}", forest.edge_count())?;
        write_edges(&mut writer, forest.edges())?;
    }
    Ok(())
}

/// Renders one block per sweep point, separated by blank lines.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_sweep(points: &[SweepPoint], mut writer: impl Write) -> io::Result<()> {
    for (index, point) in points.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "point: {index}")?;
        writeln!(writer, "vertices: {}", point.vertex_count())?;
        writeln!(writer, "density: {}", point.density())?;
        writeln!(writer, "mean edges: {:.1}", point.mean_edge_count())?;
        write_summary(&mut writer, point.kruskal())?;
        write_summary(&mut writer, point.prim())?;
        writeln!(writer, "faster: {}", point.faster())?;
    }
    Ok(())
}

fn write_summary(writer: &mut impl Write, summary: &TimingSummary) -> io::Result<()> {
    let name = summary.algorithm();
    writeln!(writer, "{name}.mean_seconds: {}", seconds(summary.mean()))?;
    writeln!(writer, "{name}.min_seconds: {}", seconds(summary.min()))?;
    writeln!(writer, "{name}.max_seconds: {}", seconds(summary.max()))
}

fn write_edges(writer: &mut impl Write, edges: &[Edge]) -> io::Result<()> {
    for edge in edges {
        let (source, target) = edge.endpoints();
        writeln!(writer, "{source} {target} {}", edge.weight())?;
    }
    Ok(())
}

fn seconds(duration: Duration) -> String {
    format!("{:.9}", duration.as_secs_f64())
}
