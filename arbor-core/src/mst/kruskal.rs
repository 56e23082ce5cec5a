//! Kruskal's algorithm over a stably sorted edge list.

use tracing::{debug, instrument};

use crate::{
    edge::Edge, error::Result, graph::Graph, tracker::OperationTracker, union_find::UnionFind,
};

use super::{MstAlgorithm, NoProbe, Probe, SpanningTreeAlgorithm, ensure_connected};

/// Kruskal's minimum spanning tree algorithm.
///
/// Runs in `O(E log E)` time and `O(V + E)` extra space.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Kruskal;

impl SpanningTreeAlgorithm for Kruskal {
    fn algorithm(&self) -> MstAlgorithm {
        MstAlgorithm::Kruskal
    }

    fn find_mst(&self, graph: &Graph) -> Result<Vec<Edge>> {
        kruskal(graph, &mut NoProbe)
    }

    fn find_mst_with_tracking(
        &self,
        graph: &Graph,
        tracker: &mut OperationTracker,
    ) -> Result<Vec<Edge>> {
        kruskal(graph, tracker)
    }
}

#[instrument(
    name = "mst.kruskal",
    err,
    skip(graph, probe),
    fields(
        vertex_count = graph.vertex_count(),
        edge_count = graph.edge_count(),
        tracked = P::TRACKED
    ),
)]
fn kruskal<P: Probe>(graph: &Graph, probe: &mut P) -> Result<Vec<Edge>> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Ok(Vec::new());
    }

    ensure_connected(graph)?;
    probe.comparison();

    // A lone vertex still scans its self-loops, none of which is accepted.
    let target = vertex_count - 1;
    let mut sorted = graph.edges().to_vec();
    sorted.sort_by_key(Edge::weight);
    probe.comparison();

    let mut sets = UnionFind::new(vertex_count);
    let mut tree = Vec::with_capacity(target);
    for edge in sorted {
        probe.comparison();
        let low_root = sets.find(edge.low());
        probe.comparison();
        let high_root = sets.find(edge.high());
        probe.comparison();

        probe.comparison();
        if low_root == high_root {
            continue;
        }

        sets.union(low_root, high_root);
        probe.union();
        tree.push(edge);

        probe.comparison();
        if tree.len() == target {
            break;
        }
    }

    debug!(
        mst_edges = tree.len(),
        weight = Graph::total_weight(&tree),
        "kruskal completed"
    );
    Ok(tree)
}
