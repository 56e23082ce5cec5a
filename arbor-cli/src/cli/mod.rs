//! Command-line interface for benchmarking the arbor MST algorithms.
//!
//! The `run` command reads a JSON suite of graphs, runs Prim and Kruskal on
//! each with operation tracking, and writes the results as JSON, as CSV
//! summaries, and as a text report.

mod commands;
mod csv_export;
mod model;
mod report;

pub use commands::{
    AlgorithmSelection, Cli, CliError, Command, RunCommand, RunSummary, render_summary, run_cli,
};
pub use csv_export::{DETAILED_CSV, FasterAlgorithm, SUMMARY_CSV, write_csv_summaries};
pub use model::{
    AlgorithmName, BenchmarkOutput, BenchmarkResult, EdgeSpec, GraphComparison, GraphSpec,
    GraphSuite, pair_by_graph,
};
pub use report::render_report;

#[cfg(test)]
mod test_helpers;
