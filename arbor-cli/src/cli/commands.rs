//! Command implementations and argument parsing for the arbor CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use arbor_core::{Graph, GraphError, MstAlgorithm, OperationTracker};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::csv_export::write_csv_summaries;
use super::model::{BenchmarkOutput, BenchmarkResult, EdgeSpec, GraphSpec, GraphSuite};
use super::report::render_report;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Benchmark Kruskal and Prim minimum spanning tree algorithms."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the algorithms over every graph in a JSON suite.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// JSON file with a top-level `graphs` array.
    pub input: PathBuf,

    /// Write the JSON results document to this path.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write `detailed_comparison.csv` and `summary_statistics.csv` into this
    /// directory, creating it when missing.
    #[arg(long = "csv-dir")]
    pub csv_dir: Option<PathBuf>,

    /// Algorithms to run on each graph.
    #[arg(long, value_enum, default_value_t = AlgorithmSelection::Both)]
    pub algorithm: AlgorithmSelection,

    /// Print the comparison report after the results table.
    #[arg(long)]
    pub report: bool,
}

/// Algorithms selectable with `--algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmSelection {
    /// Kruskal only.
    Kruskal,
    /// Prim only.
    Prim,
    /// Prim, then Kruskal.
    Both,
}

impl AlgorithmSelection {
    /// Algorithms to run, in execution order.
    #[must_use]
    pub const fn algorithms(self) -> &'static [MstAlgorithm] {
        match self {
            Self::Kruskal => &[MstAlgorithm::Kruskal],
            Self::Prim => &[MstAlgorithm::Prim],
            Self::Both => &MstAlgorithm::ALL,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
            Self::Both => "both",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed.
    #[error("I/O failure on `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input suite was not valid JSON or did not match the expected shape.
    #[error("failed to decode graph suite `{path}`: {source}")]
    Decode {
        /// Path of the suite.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The results document could not be encoded.
    #[error("failed to write results to `{path}`: {source}")]
    Encode {
        /// Destination path.
        path: PathBuf,
        /// Underlying encode error.
        #[source]
        source: serde_json::Error,
    },
    /// A CSV summary could not be written.
    #[error("failed to write CSV `{path}`: {source}")]
    Csv {
        /// Destination path.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// A graph in the suite referenced a vertex outside its range.
    #[error("graph {graph_id} is invalid: {source}")]
    InvalidGraph {
        /// Identifier of the offending graph.
        graph_id: u64,
        /// Construction failure reported by the core.
        #[source]
        source: GraphError,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// The results document, also written to `--output` when given.
    pub output: BenchmarkOutput,
    /// Files written during the run.
    pub artefacts: Vec<PathBuf>,
    /// Whether the text report was requested.
    pub report: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the suite cannot be read, a graph is invalid, or
/// an output file cannot be written. Algorithms that fail on a single graph
/// are logged and skipped.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{AlgorithmSelection, Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(
///     file.path(),
///     r#"{"graphs":[{"id":1,"vertices":2,"edges":[{"from":0,"to":1,"weight":3}]}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input: file.path().to_path_buf(),
///         output: None,
///         csv_dir: None,
///         algorithm: AlgorithmSelection::Both,
///         report: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.output.total_tests, 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<RunSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(input = %command.input.display(), algorithm = command.algorithm.as_str()),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunSummary, CliError> {
    let suite = load_suite(&command.input)?;

    let mut results = Vec::new();
    for spec in &suite.graphs {
        results.extend(benchmark_graph(spec, command.algorithm.algorithms())?);
    }

    let output = BenchmarkOutput::new(results);
    let mut artefacts = Vec::new();

    if let Some(path) = &command.output {
        write_output(path, &output)?;
        artefacts.push(path.clone());
    }

    if let Some(dir) = &command.csv_dir {
        artefacts.extend(write_csv_summaries(dir, &output.results)?);
    }

    info!(
        graphs = suite.graphs.len(),
        results = output.total_tests,
        artefacts = artefacts.len(),
        "command completed"
    );
    Ok(RunSummary {
        output,
        artefacts,
        report: command.report,
    })
}

#[instrument(name = "cli.load_suite", err, fields(path = %path.display()))]
pub(super) fn load_suite(path: &Path) -> Result<GraphSuite, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let suite: GraphSuite =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    info!(graphs = suite.graphs.len(), "suite loaded");
    Ok(suite)
}

/// Runs each of `algorithms` on one graph with operation tracking.
///
/// A failing algorithm is logged and produces no row.
#[instrument(
    name = "cli.benchmark_graph",
    err,
    skip(spec, algorithms),
    fields(graph_id = spec.id, vertices = spec.vertices, edges = spec.edges.len()),
)]
pub(super) fn benchmark_graph(
    spec: &GraphSpec,
    algorithms: &[MstAlgorithm],
) -> Result<Vec<BenchmarkResult>, CliError> {
    let graph = spec.to_graph().map_err(|source| CliError::InvalidGraph {
        graph_id: spec.id,
        source,
    })?;

    Ok(algorithms
        .iter()
        .filter_map(|&algorithm| run_algorithm(spec, &graph, algorithm))
        .collect())
}

fn run_algorithm(
    spec: &GraphSpec,
    graph: &Graph,
    algorithm: MstAlgorithm,
) -> Option<BenchmarkResult> {
    let solver = algorithm.solver();
    let mut tracker = OperationTracker::new();

    let started = Instant::now();
    let outcome = solver.find_mst_with_tracking(graph, &mut tracker);
    let elapsed = started.elapsed();

    let tree = match outcome {
        Ok(tree) => tree,
        Err(err) => {
            warn!(
                graph_id = spec.id,
                algorithm = algorithm.as_str(),
                code = err.code().as_str(),
                error = %err,
                "algorithm failed; skipping result"
            );
            return None;
        }
    };

    let result = BenchmarkResult {
        graph_id: spec.id,
        graph_name: spec.name(),
        algorithm: algorithm.into(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        mst_weight: solver.calculate_mst_weight(&tree),
        execution_time_ms: elapsed.as_secs_f64() * 1_000.0,
        comparisons: tracker.comparison_count(),
        unions: tracker.union_count(),
        mst_edges: tree.iter().map(EdgeSpec::from).collect(),
        is_valid_mst: solver.is_valid_mst(graph, &tree),
    };
    info!(
        graph_id = result.graph_id,
        algorithm = algorithm.as_str(),
        mst_weight = result.mst_weight,
        comparisons = result.comparisons,
        unions = result.unions,
        valid = result.is_valid_mst,
        "benchmark recorded"
    );
    Some(result)
}

#[instrument(name = "cli.write_output", err, skip(output), fields(path = %path.display()))]
pub(super) fn write_output(path: &Path, output: &BenchmarkOutput) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, output).map_err(|source| CliError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_error)?;
    info!(results = output.total_tests, "results written");
    Ok(())
}

/// Renders `summary` to `writer`: one CSV-style line per result, followed by
/// the comparison report when it was requested.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{BenchmarkOutput, RunSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = RunSummary {
///     output: BenchmarkOutput::new(Vec::new()),
///     artefacts: Vec::new(),
///     report: false,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?.lines().count(), 1);
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &RunSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "Graph ID,Algorithm,Vertices,Edges,MST Weight,Execution Time(ms),Comparisons,Unions"
    )?;
    for result in &summary.output.results {
        writeln!(
            writer,
            "{},{},{},{},{},{:.3},{},{}",
            result.graph_id,
            result.algorithm.as_str(),
            result.vertices,
            result.edges,
            result.mst_weight,
            result.execution_time_ms,
            result.comparisons,
            result.unions,
        )?;
    }
    if summary.report {
        writeln!(writer)?;
        render_report(&summary.output.results, &mut writer)?;
    }
    Ok(())
}
