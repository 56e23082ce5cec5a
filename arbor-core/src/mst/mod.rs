//! Minimum spanning tree (MST) construction.
//!
//! Two sequential algorithms share one public surface,
//! [`SpanningTreeAlgorithm`]:
//!
//! - [`Kruskal`] sorts every edge by weight (stable, so equal weights keep
//!   insertion order) and accepts the lightest edge joining two different
//!   union-find classes until `V - 1` edges are held.
//! - [`Prim`] grows a single tree from vertex `0`, always taking the lightest
//!   frontier edge. The frontier is a lazy min-heap: entries whose endpoints
//!   are both already in the tree are discarded when popped rather than
//!   removed eagerly. Equal weights are ordered by edge insertion index.
//!
//! Both reject disconnected inputs with [`MstError::Disconnected`] before doing
//! any work, and return an empty tree for graphs with zero or one vertex.
//!
//! The tracked and untracked entry points run the same generic code. The
//! untracked path passes a zero-sized probe whose hooks compile to nothing, so
//! recording operation counts cannot change the selected edges.

mod kruskal;
mod prim;

use std::fmt;

use tracing::warn;

use crate::{
    edge::Edge,
    error::{MstError, Result},
    graph::Graph,
    tracker::OperationTracker,
};

pub use self::kruskal::Kruskal;
pub use self::prim::Prim;

/// Common interface exposed by every MST algorithm.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, Kruskal, Prim, SpanningTreeAlgorithm};
///
/// let graph = Graph::from_edges(
///     4,
///     [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
/// )?;
/// for algorithm in [&Kruskal as &dyn SpanningTreeAlgorithm, &Prim] {
///     let tree = algorithm.find_mst(&graph)?;
///     assert_eq!(tree.len(), 3);
///     assert_eq!(algorithm.calculate_mst_weight(&tree), 19);
///     assert!(algorithm.is_valid_mst(&graph, &tree));
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait SpanningTreeAlgorithm {
    /// Identifies the algorithm for reporting.
    fn algorithm(&self) -> MstAlgorithm;

    /// Computes a minimum spanning tree of `graph`.
    ///
    /// Returns exactly `vertex_count - 1` edges for a connected graph and an
    /// empty tree when the graph has at most one vertex.
    ///
    /// # Errors
    /// Returns [`MstError::Disconnected`] when `graph` is not connected.
    fn find_mst(&self, graph: &Graph) -> Result<Vec<Edge>>;

    /// Computes the same tree as [`Self::find_mst`] while recording primitive
    /// operation counts in `tracker`.
    ///
    /// # Errors
    /// Returns [`MstError::Disconnected`] when `graph` is not connected.
    fn find_mst_with_tracking(
        &self,
        graph: &Graph,
        tracker: &mut OperationTracker,
    ) -> Result<Vec<Edge>>;

    /// Sums the weights of `edges`.
    fn calculate_mst_weight(&self, edges: &[Edge]) -> i64 {
        Graph::total_weight(edges)
    }

    /// Checks that `edges` form a spanning tree of `graph`.
    ///
    /// Delegates to [`Graph::is_valid_mst`].
    fn is_valid_mst(&self, graph: &Graph, edges: &[Edge]) -> bool {
        graph.is_valid_mst(edges)
    }
}

/// Names the available MST algorithms.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MstAlgorithm {
    /// Kruskal's edge-sorting algorithm.
    Kruskal,
    /// Prim's frontier-growing algorithm.
    Prim,
}

impl MstAlgorithm {
    /// Every algorithm, in reporting order.
    pub const ALL: [Self; 2] = [Self::Prim, Self::Kruskal];

    /// Returns the stable label used by reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
        }
    }

    /// Returns the implementation for this algorithm.
    #[must_use]
    pub const fn solver(self) -> &'static dyn SpanningTreeAlgorithm {
        match self {
            Self::Kruskal => &Kruskal,
            Self::Prim => &Prim,
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observation hooks threaded through the generic algorithm bodies.
pub(crate) trait Probe {
    /// Whether the probe records anything; surfaced on tracing spans.
    const TRACKED: bool;

    fn comparison(&mut self);

    fn union(&mut self);
}

/// Probe used by the untracked entry points.
pub(crate) struct NoProbe;

impl Probe for NoProbe {
    const TRACKED: bool = false;

    #[inline(always)]
    fn comparison(&mut self) {}

    #[inline(always)]
    fn union(&mut self) {}
}

impl Probe for OperationTracker {
    const TRACKED: bool = true;

    #[inline]
    fn comparison(&mut self) {
        self.record_comparison();
    }

    #[inline]
    fn union(&mut self) {
        self.record_union();
    }
}

/// Fails with [`MstError::Disconnected`] unless every vertex is reachable
/// from vertex `0`.
pub(crate) fn ensure_connected(graph: &Graph) -> Result<()> {
    let vertex_count = graph.vertex_count();
    let reachable = graph.reachable_from_origin();
    if reachable == vertex_count {
        return Ok(());
    }
    warn!(
        vertex_count,
        reachable, "graph is not connected; no spanning tree exists"
    );
    Err(MstError::Disconnected {
        vertex_count,
        reachable,
    })
}

#[cfg(test)]
mod property;
