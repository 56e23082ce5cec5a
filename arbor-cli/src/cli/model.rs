//! JSON documents read and written by the benchmark driver.
//!
//! Field names are camel-cased on the wire so suites and result files stay
//! interchangeable with existing tooling.

use arbor_core::{Edge, Graph, GraphError, MstAlgorithm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A collection of graphs to benchmark, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraphSuite {
    /// Graphs to benchmark.
    pub graphs: Vec<GraphSpec>,
}

/// One graph of a [`GraphSuite`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraphSpec {
    /// Caller-assigned identifier, echoed into every result row.
    pub id: u64,
    /// Number of vertices; vertices are numbered `0..vertices`.
    pub vertices: usize,
    /// Weighted undirected edges.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    /// Display name used in result rows.
    #[must_use]
    pub fn name(&self) -> String {
        format!("Graph {}", self.id)
    }

    /// Builds the core [`Graph`], keeping edge order.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when an edge endpoint is outside
    /// `0..vertices`.
    pub fn to_graph(&self) -> Result<Graph, GraphError> {
        Graph::from_edges(
            self.vertices,
            self.edges.iter().map(|edge| (edge.from, edge.to, edge.weight)),
        )
    }
}

/// Wire form of a weighted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct EdgeSpec {
    /// First endpoint.
    pub from: usize,
    /// Second endpoint.
    pub to: usize,
    /// Signed edge weight.
    pub weight: i32,
}

impl From<&Edge> for EdgeSpec {
    fn from(edge: &Edge) -> Self {
        Self {
            from: edge.low(),
            to: edge.high(),
            weight: edge.weight(),
        }
    }
}

/// Algorithm label as written to result files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AlgorithmName {
    /// Prim's algorithm.
    Prim,
    /// Kruskal's algorithm.
    Kruskal,
}

impl AlgorithmName {
    /// Stable label, matching the serialised form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "Prim",
            Self::Kruskal => "Kruskal",
        }
    }
}

impl From<MstAlgorithm> for AlgorithmName {
    fn from(algorithm: MstAlgorithm) -> Self {
        match algorithm {
            MstAlgorithm::Prim => Self::Prim,
            MstAlgorithm::Kruskal => Self::Kruskal,
        }
    }
}

/// Outcome of one algorithm on one graph.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    /// Identifier of the source graph.
    pub graph_id: u64,
    /// Display name of the source graph.
    pub graph_name: String,
    /// Algorithm that produced this row.
    pub algorithm: AlgorithmName,
    /// Vertex count of the source graph.
    pub vertices: usize,
    /// Edge count of the source graph.
    pub edges: usize,
    /// Total weight of the tree.
    pub mst_weight: i64,
    /// Wall-clock time of the tracked run, in milliseconds.
    pub execution_time_ms: f64,
    /// Comparisons recorded by the tracker.
    pub comparisons: u64,
    /// Unions recorded by the tracker; always zero for Prim.
    pub unions: u64,
    /// Tree edges in the order the algorithm accepted them.
    pub mst_edges: Vec<EdgeSpec>,
    /// Whether the tree passed validation against the source graph.
    #[serde(rename = "isValidMST")]
    pub is_valid_mst: bool,
}

/// The result file written after a run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkOutput {
    /// One row per successful algorithm run.
    pub results: Vec<BenchmarkResult>,
    /// When the run finished.
    pub timestamp: DateTime<Utc>,
    /// Number of rows in `results`.
    pub total_tests: usize,
}

impl BenchmarkOutput {
    /// Wraps `results`, stamping the current time.
    #[must_use]
    pub fn new(results: Vec<BenchmarkResult>) -> Self {
        let total_tests = results.len();
        Self {
            results,
            timestamp: Utc::now(),
            total_tests,
        }
    }
}

/// The Prim and Kruskal rows recorded for a single graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphComparison<'a> {
    /// Prim's row.
    pub prim: &'a BenchmarkResult,
    /// Kruskal's row.
    pub kruskal: &'a BenchmarkResult,
}

impl GraphComparison<'_> {
    /// Identifier of the compared graph.
    #[must_use]
    pub const fn graph_id(&self) -> u64 {
        self.prim.graph_id
    }

    /// Whether both algorithms found trees of equal weight.
    #[must_use]
    pub const fn weights_match(&self) -> bool {
        self.prim.mst_weight == self.kruskal.mst_weight
    }
}

/// Pairs Prim and Kruskal rows by graph id.
///
/// Graphs are returned in order of first appearance. A graph missing either
/// row is left out; when a graph id repeats, the first row per algorithm wins.
#[must_use]
pub fn pair_by_graph(results: &[BenchmarkResult]) -> Vec<GraphComparison<'_>> {
    let mut order: Vec<u64> = Vec::new();
    let mut slots: Vec<(Option<&BenchmarkResult>, Option<&BenchmarkResult>)> = Vec::new();

    for result in results {
        let position = order
            .iter()
            .position(|id| *id == result.graph_id)
            .unwrap_or_else(|| {
                order.push(result.graph_id);
                slots.push((None, None));
                order.len() - 1
            });
        let Some(slot) = slots.get_mut(position) else {
            continue;
        };
        match result.algorithm {
            AlgorithmName::Prim => {
                slot.0.get_or_insert(result);
            }
            AlgorithmName::Kruskal => {
                slot.1.get_or_insert(result);
            }
        }
    }

    slots
        .into_iter()
        .filter_map(|slot| match slot {
            (Some(prim), Some(kruskal)) => Some(GraphComparison { prim, kruskal }),
            _ => None,
        })
        .collect()
}
