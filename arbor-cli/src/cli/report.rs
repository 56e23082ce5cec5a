//! Plain-text comparison report.

use std::io::{self, Write};

use super::model::{AlgorithmName, BenchmarkResult, GraphComparison, pair_by_graph};

const RULE_WIDTH: usize = 70;

/// Writes the comparison report for `results` to `writer`.
///
/// The report has three sections: per-algorithm results with totals, a
/// per-graph comparison that checks both trees weigh the same, and aggregate
/// statistics over every graph with both results.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// # use arbor_cli::cli::render_report;
/// let mut buffer = Vec::new();
/// render_report(&[], &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("Total Graphs Tested: 0"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_report(results: &[BenchmarkResult], mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(writer, "MST ALGORITHM PERFORMANCE REPORT")?;
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;

    writeln!(writer)?;
    writeln!(writer, "1. RESULTS BY ALGORITHM")?;
    for algorithm in [AlgorithmName::Prim, AlgorithmName::Kruskal] {
        write_algorithm_section(&mut writer, algorithm, results)?;
    }

    let pairs = pair_by_graph(results);

    writeln!(writer)?;
    writeln!(writer, "2. COMPARISON BY GRAPH")?;
    write_comparisons(&mut writer, &pairs)?;

    writeln!(writer)?;
    writeln!(writer, "3. SUMMARY STATISTICS")?;
    write_statistics(&mut writer, &pairs)?;
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

fn write_algorithm_section(
    writer: &mut impl Write,
    algorithm: AlgorithmName,
    results: &[BenchmarkResult],
) -> io::Result<()> {
    let rows: Vec<&BenchmarkResult> = results
        .iter()
        .filter(|result| result.algorithm == algorithm)
        .collect();

    writeln!(writer)?;
    writeln!(writer, "{}'s algorithm", algorithm.as_str())?;
    writeln!(writer, "{}", "-".repeat(30))?;
    for row in &rows {
        writeln!(
            writer,
            "Graph {}: V={}, E={}, Weight={}, Time={:.3}ms, Comparisons={}, Unions={}",
            row.graph_id,
            row.vertices,
            row.edges,
            row.mst_weight,
            row.execution_time_ms,
            row.comparisons,
            row.unions,
        )?;
    }

    let total_time: f64 = rows.iter().map(|row| row.execution_time_ms).sum();
    let total_comparisons: u64 = rows.iter().map(|row| row.comparisons).sum();
    let total_unions: u64 = rows.iter().map(|row| row.unions).sum();
    writeln!(
        writer,
        "{} totals: Avg Time={:.3}ms, Total Comparisons={total_comparisons}, Total Unions={total_unions}",
        algorithm.as_str(),
        mean(total_time, rows.len()),
    )
}

fn write_comparisons(writer: &mut impl Write, pairs: &[GraphComparison<'_>]) -> io::Result<()> {
    writeln!(
        writer,
        "Graph ID | Algorithm | Vertices | Edges | MST Weight | Time(ms) | Comparisons | Unions"
    )?;
    writeln!(writer, "{}", "-".repeat(90))?;
    for pair in pairs {
        for row in [pair.prim, pair.kruskal] {
            writeln!(
                writer,
                "{:>8} | {:<9} | {:>8} | {:>5} | {:>10} | {:>8.3} | {:>11} | {:>6}",
                row.graph_id,
                row.algorithm.as_str(),
                row.vertices,
                row.edges,
                row.mst_weight,
                row.execution_time_ms,
                row.comparisons,
                row.unions,
            )?;
        }
        if pair.weights_match() {
            writeln!(writer, "         MST weights match: {}", pair.prim.mst_weight)?;
        } else {
            writeln!(
                writer,
                "         MST weights differ: Prim={}, Kruskal={}",
                pair.prim.mst_weight, pair.kruskal.mst_weight,
            )?;
        }
    }
    Ok(())
}

fn write_statistics(writer: &mut impl Write, pairs: &[GraphComparison<'_>]) -> io::Result<()> {
    let graphs = pairs.len();
    let prim_total: u64 = pairs.iter().map(|pair| pair.prim.comparisons).sum();
    let kruskal_total: u64 = pairs.iter().map(|pair| pair.kruskal.comparisons).sum();
    let prim_fewer = pairs
        .iter()
        .filter(|pair| pair.prim.comparisons < pair.kruskal.comparisons)
        .count();
    let kruskal_fewer = pairs
        .iter()
        .filter(|pair| pair.kruskal.comparisons < pair.prim.comparisons)
        .count();

    writeln!(writer, "Total Graphs Tested: {graphs}")?;
    writeln!(writer, "Average Comparisons:")?;
    writeln!(
        writer,
        "  Prim's algorithm:    {:.2}",
        mean(prim_total as f64, graphs)
    )?;
    writeln!(
        writer,
        "  Kruskal's algorithm: {:.2}",
        mean(kruskal_total as f64, graphs)
    )?;
    writeln!(writer, "Comparison efficiency:")?;
    writeln!(writer, "  Prim's fewer comparisons:    {prim_fewer} graphs")?;
    writeln!(writer, "  Kruskal's fewer comparisons: {kruskal_fewer} graphs")?;

    let (min_vertices, max_vertices) = range(pairs.iter().map(|pair| pair.prim.vertices));
    let (min_edges, max_edges) = range(pairs.iter().map(|pair| pair.prim.edges));
    writeln!(writer, "Graph size range:")?;
    writeln!(writer, "  Vertices: {min_vertices} - {max_vertices}")?;
    writeln!(writer, "  Edges:    {min_edges} - {max_edges}")?;

    if graphs > 0 {
        write_averages(writer, pairs)?;
    }
    Ok(())
}

/// Paired per-algorithm averages and the average speed ratio.
fn write_averages(writer: &mut impl Write, pairs: &[GraphComparison<'_>]) -> io::Result<()> {
    let prim = Averages::of(pairs.iter().map(|pair| pair.prim));
    let kruskal = Averages::of(pairs.iter().map(|pair| pair.kruskal));

    writeln!(writer, "Average performance:")?;
    for (label, averages) in [("Prim's:   ", &prim), ("Kruskal's:", &kruskal)] {
        writeln!(
            writer,
            "  {label} Avg Time={:.3}ms, Avg Comparisons={:.2}, Avg Unions={:.2}",
            averages.time_ms, averages.comparisons, averages.unions,
        )?;
    }

    let (faster, slower_ms, faster_ms) = if prim.time_ms < kruskal.time_ms {
        ("Prim's", kruskal.time_ms, prim.time_ms)
    } else {
        ("Kruskal's", prim.time_ms, kruskal.time_ms)
    };
    if faster_ms > 0.0 {
        writeln!(
            writer,
            "  {faster} is {:.2}x faster on average",
            slower_ms / faster_ms
        )?;
    }
    Ok(())
}

struct Averages {
    time_ms: f64,
    comparisons: f64,
    unions: f64,
}

impl Averages {
    fn of<'r>(rows: impl Iterator<Item = &'r BenchmarkResult>) -> Self {
        let (mut count, mut time_ms, mut comparisons, mut unions) = (0_usize, 0.0, 0_u64, 0_u64);
        for row in rows {
            count += 1;
            time_ms += row.execution_time_ms;
            comparisons += row.comparisons;
            unions += row.unions;
        }
        Self {
            time_ms: mean(time_ms, count),
            comparisons: mean(comparisons as f64, count),
            unions: mean(unions as f64, count),
        }
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn range(values: impl Iterator<Item = usize> + Clone) -> (usize, usize) {
    (
        values.clone().min().unwrap_or(0),
        values.max().unwrap_or(0),
    )
}
