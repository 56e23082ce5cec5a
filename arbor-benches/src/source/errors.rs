//! Error types for synthetic graph generation.

use arbor_core::GraphError;

/// Errors that may occur while generating a benchmark graph.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// Too few edges were requested to connect every vertex.
    #[error("{edge_count} edges cannot connect {vertex_count} vertices")]
    TooFewEdges {
        /// Number of edges requested.
        edge_count: usize,
        /// Number of vertices requested.
        vertex_count: usize,
    },
    /// Extra edges were requested for a graph with a single vertex.
    #[error("{extra_edges} extra edges requested but a single vertex has no distinct pair")]
    NoDistinctPair {
        /// Edges requested beyond the spanning tree.
        extra_edges: usize,
    },
    /// The weight range was empty.
    #[error("invalid weight range: min={min_weight}, max={max_weight}")]
    InvalidWeightRange {
        /// Smallest configured weight.
        min_weight: i32,
        /// Largest configured weight.
        max_weight: i32,
    },
    /// The core rejected a generated edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
