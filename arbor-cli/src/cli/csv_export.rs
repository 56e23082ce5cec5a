//! CSV summaries of a benchmark run.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tracing::{info, instrument};

use super::commands::CliError;
use super::model::{AlgorithmName, BenchmarkResult, GraphComparison, pair_by_graph};

/// File name of the per-run table.
pub const DETAILED_CSV: &str = "detailed_comparison.csv";
/// File name of the per-graph Prim versus Kruskal table.
pub const SUMMARY_CSV: &str = "summary_statistics.csv";

#[derive(Debug, Serialize)]
struct DetailedRow<'a> {
    #[serde(rename = "Graph_ID")]
    graph_id: u64,
    #[serde(rename = "Graph_Name")]
    graph_name: &'a str,
    #[serde(rename = "Algorithm")]
    algorithm: AlgorithmName,
    #[serde(rename = "Vertices")]
    vertices: usize,
    #[serde(rename = "Edges")]
    edges: usize,
    #[serde(rename = "MST_Weight")]
    mst_weight: i64,
    #[serde(rename = "Execution_Time_ms", serialize_with = "millis")]
    execution_time_ms: f64,
    #[serde(rename = "Comparisons")]
    comparisons: u64,
    #[serde(rename = "Unions")]
    unions: u64,
    #[serde(rename = "Valid_MST")]
    valid_mst: bool,
}

impl<'a> From<&'a BenchmarkResult> for DetailedRow<'a> {
    fn from(result: &'a BenchmarkResult) -> Self {
        Self {
            graph_id: result.graph_id,
            graph_name: &result.graph_name,
            algorithm: result.algorithm,
            vertices: result.vertices,
            edges: result.edges,
            mst_weight: result.mst_weight,
            execution_time_ms: result.execution_time_ms,
            comparisons: result.comparisons,
            unions: result.unions,
            valid_mst: result.is_valid_mst,
        }
    }
}

/// Which algorithm ran faster on a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FasterAlgorithm {
    /// Prim took less time.
    Prim,
    /// Kruskal took less time.
    Kruskal,
    /// Both took the same time.
    Equal,
}

impl FasterAlgorithm {
    /// Compares Prim's time against Kruskal's.
    #[must_use]
    pub fn from_times(prim_ms: f64, kruskal_ms: f64) -> Self {
        match prim_ms.total_cmp(&kruskal_ms) {
            Ordering::Greater => Self::Kruskal,
            Ordering::Less => Self::Prim,
            Ordering::Equal => Self::Equal,
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryRow {
    #[serde(rename = "Graph_ID")]
    graph_id: u64,
    #[serde(rename = "Vertices")]
    vertices: usize,
    #[serde(rename = "Edges")]
    edges: usize,
    #[serde(rename = "MST_Weight")]
    mst_weight: i64,
    #[serde(rename = "Prim_Time_ms", serialize_with = "millis")]
    prim_time_ms: f64,
    #[serde(rename = "Prim_Comparisons")]
    prim_comparisons: u64,
    #[serde(rename = "Kruskal_Time_ms", serialize_with = "millis")]
    kruskal_time_ms: f64,
    #[serde(rename = "Kruskal_Comparisons")]
    kruskal_comparisons: u64,
    #[serde(rename = "Kruskal_Unions")]
    kruskal_unions: u64,
    #[serde(rename = "Time_Diff_ms", serialize_with = "millis")]
    time_diff_ms: f64,
    #[serde(rename = "Comparison_Diff")]
    comparison_diff: i64,
    #[serde(rename = "Faster_Algorithm")]
    faster_algorithm: FasterAlgorithm,
}

impl From<GraphComparison<'_>> for SummaryRow {
    fn from(pair: GraphComparison<'_>) -> Self {
        let GraphComparison { prim, kruskal } = pair;
        Self {
            graph_id: prim.graph_id,
            vertices: prim.vertices,
            edges: prim.edges,
            mst_weight: prim.mst_weight,
            prim_time_ms: prim.execution_time_ms,
            prim_comparisons: prim.comparisons,
            kruskal_time_ms: kruskal.execution_time_ms,
            kruskal_comparisons: kruskal.comparisons,
            kruskal_unions: kruskal.unions,
            time_diff_ms: prim.execution_time_ms - kruskal.execution_time_ms,
            comparison_diff: signed_difference(prim.comparisons, kruskal.comparisons),
            faster_algorithm: FasterAlgorithm::from_times(
                prim.execution_time_ms,
                kruskal.execution_time_ms,
            ),
        }
    }
}

/// `minuend - subtrahend`, saturating at the bounds of `i64`.
pub(super) fn signed_difference(minuend: u64, subtrahend: u64) -> i64 {
    let magnitude = i64::try_from(minuend.abs_diff(subtrahend)).unwrap_or(i64::MAX);
    if minuend >= subtrahend {
        magnitude
    } else {
        -magnitude
    }
}

// Milliseconds are written with microsecond precision.
fn millis<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.3}"))
}

/// Writes [`DETAILED_CSV`] and [`SUMMARY_CSV`] into `dir`.
///
/// The detailed table holds one row per result. The summary table holds one
/// row per graph that has both a Prim and a Kruskal result.
///
/// # Errors
/// Returns [`CliError::Io`] when `dir` cannot be created and
/// [`CliError::Csv`] when either file cannot be written.
#[instrument(
    name = "cli.write_csv",
    err,
    skip(results),
    fields(dir = %dir.display(), rows = results.len()),
)]
pub fn write_csv_summaries(
    dir: &Path,
    results: &[BenchmarkResult],
) -> Result<Vec<PathBuf>, CliError> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let detailed = dir.join(DETAILED_CSV);
    write_rows(&detailed, results.iter().map(DetailedRow::from))?;

    let summary = dir.join(SUMMARY_CSV);
    write_rows(
        &summary,
        pair_by_graph(results).into_iter().map(SummaryRow::from),
    )?;

    Ok(vec![detailed, summary])
}

fn write_rows<R, I>(path: &Path, rows: I) -> Result<(), CliError>
where
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let csv_error = |source| CliError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    let mut count = 0_usize;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
        count += 1;
    }
    writer.flush().map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = count, "csv written");
    Ok(())
}
