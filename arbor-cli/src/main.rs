//! `arbor` binary: runs a graph suite through both MST algorithms.
//!
//! Logging comes up before argument parsing so that suite loading, per-graph
//! skips and fatal errors all reach the subscriber. Any failure becomes
//! `ExitCode::FAILURE` after a single `error!` event.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use arbor_core::GraphErrorCode;
use clap::Parser;

use arbor_cli::{
    cli::{Cli, CliError, RunSummary, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn execute() -> Result<()> {
    let summary = run_cli(Cli::parse()).context("benchmark run failed")?;
    print_summary(&summary)
}

fn print_summary(summary: &RunSummary) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(summary, &mut out).context("failed to write results table")?;
    out.flush().context("failed to flush stdout")
}

/// Pulls the offending graph id and error code out of a graph failure.
fn graph_failure(err: &anyhow::Error) -> Option<(u64, GraphErrorCode)> {
    match err.downcast_ref::<CliError>()? {
        CliError::InvalidGraph { graph_id, source } => Some((*graph_id, source.code())),
        _ => None,
    }
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let Err(err) = execute() else {
        return ExitCode::SUCCESS;
    };
    let failure = graph_failure(&err);
    error!(
        error = %err,
        graph_id = failure.map(|(graph_id, _)| graph_id),
        code = failure.map(|(_, code)| field::display(code.as_str())),
        "arbor exited with an error"
    );
    ExitCode::FAILURE
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is not available until logging initialises"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("arbor: cannot initialise logging: {err}");
}
