//! Prim's algorithm with a lazy binary-heap frontier.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, instrument};

use crate::{
    edge::Edge,
    error::{MstError, Result},
    graph::Graph,
    tracker::OperationTracker,
};

use super::{MstAlgorithm, NoProbe, Probe, SpanningTreeAlgorithm, ensure_connected};

/// Prim's minimum spanning tree algorithm, grown from vertex `0`.
///
/// Runs in `O(E log E)` time; the lazy frontier can hold every edge at once.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Prim;

impl SpanningTreeAlgorithm for Prim {
    fn algorithm(&self) -> MstAlgorithm {
        MstAlgorithm::Prim
    }

    fn find_mst(&self, graph: &Graph) -> Result<Vec<Edge>> {
        prim(graph, &mut NoProbe)
    }

    fn find_mst_with_tracking(
        &self,
        graph: &Graph,
        tracker: &mut OperationTracker,
    ) -> Result<Vec<Edge>> {
        prim(graph, tracker)
    }
}

/// Frontier entry ordered by weight, then by the edge's insertion index.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
struct Candidate {
    weight: i32,
    index: usize,
}

struct Frontier<'g> {
    graph: &'g Graph,
    heap: BinaryHeap<Reverse<Candidate>>,
}

impl<'g> Frontier<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            heap: BinaryHeap::new(),
        }
    }

    fn push<P: Probe>(&mut self, index: usize, probe: &mut P) {
        let weight = self.graph.edges()[index].weight();
        self.heap.push(Reverse(Candidate { weight, index }));
        probe.comparison();
    }

    fn pop<P: Probe>(&mut self, probe: &mut P) -> Option<Edge> {
        let Reverse(candidate) = self.heap.pop()?;
        probe.comparison();
        Some(self.graph.edges()[candidate.index])
    }
}

#[instrument(
    name = "mst.prim",
    err,
    skip(graph, probe),
    fields(
        vertex_count = graph.vertex_count(),
        edge_count = graph.edge_count(),
        tracked = P::TRACKED
    ),
)]
fn prim<P: Probe>(graph: &Graph, probe: &mut P) -> Result<Vec<Edge>> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Ok(Vec::new());
    }

    ensure_connected(graph)?;
    probe.comparison();

    let target = vertex_count - 1;
    let mut in_tree = vec![false; vertex_count];
    let mut frontier = Frontier::new(graph);
    let mut tree = Vec::with_capacity(target);

    in_tree[0] = true;
    for &index in graph.incident_indices(0) {
        frontier.push(index, probe);
    }

    while tree.len() < target {
        let Some(edge) = frontier.pop(probe) else {
            break;
        };

        probe.comparison();
        let (low_in, high_in) = (in_tree[edge.low()], in_tree[edge.high()]);
        if low_in && high_in {
            continue;
        }

        // Only edges incident to the tree are ever pushed.
        let reached = if low_in { edge.high() } else { edge.low() };
        in_tree[reached] = true;
        tree.push(edge);

        for &index in graph.incident_indices(reached) {
            let neighbour = graph.edges()[index].other_vertex(reached)?;
            probe.comparison();
            if !in_tree[neighbour] {
                frontier.push(index, probe);
            }
        }
    }

    if tree.len() < target {
        return Err(MstError::Disconnected {
            vertex_count,
            reachable: tree.len() + 1,
        });
    }

    debug!(
        mst_edges = tree.len(),
        weight = Graph::total_weight(&tree),
        "prim completed"
    );
    Ok(tree)
}
