//! Weighted undirected graph with an incrementally maintained adjacency index.
//!
//! Vertices are the implicit range `0..vertex_count`. Edges are kept in
//! insertion order; parallel edges and self-loops are allowed. Each vertex's
//! adjacency list stores indices into the edge list, so a self-loop appears
//! once in its vertex's list and every other edge appears in both endpoint
//! lists.

use std::collections::{BTreeSet, HashMap, hash_map::Entry};
use std::fmt;

use crate::{edge::Edge, error::GraphError, union_find::UnionFind};

/// A weighted undirected graph over a fixed vertex count.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(2, 1, 1)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.is_connected());
/// assert_eq!(graph.adjacent_edges(1)?.count(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, preserving their
    /// order.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] for the first triple whose
    /// endpoint is outside `0..vertex_count`.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, i32)>,
    {
        let mut graph = Self::new(vertex_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Appends an edge between `from` and `to` and indexes it under both
    /// endpoints (once for a self-loop).
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when either endpoint is outside
    /// `0..vertex_count`. The graph is left unchanged.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i32) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.push_edge(Edge::new(from, to, weight));
        Ok(())
    }

    fn push_edge(&mut self, edge: Edge) {
        let index = self.edges.len();
        self.edges.push(edge);
        self.adjacency[edge.low()].push(index);
        if !edge.is_self_loop() {
            self.adjacency[edge.high()].push(index);
        }
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edges, counting parallel edges and self-loops.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns every edge in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the edges touching `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when `vertex` is out of range.
    pub fn adjacent_edges(
        &self,
        vertex: usize,
    ) -> Result<impl ExactSizeIterator<Item = &Edge> + '_, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex]
            .iter()
            .map(move |&index| &self.edges[index]))
    }

    /// Returns the edge-list indices touching `vertex`.
    pub(crate) fn incident_indices(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// Returns the distinct vertices that at least one edge touches.
    ///
    /// Isolated vertices are absent from the set.
    #[must_use]
    pub fn touched_vertices(&self) -> BTreeSet<usize> {
        self.edges
            .iter()
            .flat_map(|edge| [edge.low(), edge.high()])
            .collect()
    }

    /// Returns `true` when every vertex is reachable from vertex `0`.
    ///
    /// A graph with no vertices is trivially connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.reachable_from_origin() == self.vertex_count
    }

    /// Counts the vertices reachable from vertex `0` with an iterative
    /// depth-first traversal over the adjacency index.
    pub(crate) fn reachable_from_origin(&self) -> usize {
        if self.vertex_count == 0 {
            return 0;
        }

        let mut visited = vec![false; self.vertex_count];
        let mut stack = vec![0];
        visited[0] = true;
        let mut reached = 1;

        while let Some(vertex) = stack.pop() {
            for &index in &self.adjacency[vertex] {
                let edge = &self.edges[index];
                let next = if edge.low() == vertex {
                    edge.high()
                } else {
                    edge.low()
                };
                if !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }

        reached
    }

    /// Builds a graph containing only `selected`, renumbered onto a dense
    /// vertex range.
    ///
    /// Vertices are numbered in the order they are first encountered while
    /// scanning `selected` (lower endpoint before higher endpoint), so the new
    /// ids depend on edge order but connectivity does not. The source graph is
    /// not consulted; `selected` may contain edges it does not hold.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph};
    ///
    /// let graph = Graph::new(10);
    /// let sub = graph.subgraph(&[Edge::new(7, 9, 1), Edge::new(3, 7, 2)]);
    /// assert_eq!(sub.vertex_count(), 3);
    /// assert_eq!(sub.edges(), &[Edge::new(0, 1, 1), Edge::new(0, 2, 2)]);
    /// ```
    #[must_use]
    pub fn subgraph(&self, selected: &[Edge]) -> Self {
        let mut mapping: HashMap<usize, usize> = HashMap::new();
        let mut remapped = Vec::with_capacity(selected.len());
        for edge in selected {
            let low = dense_id(&mut mapping, edge.low());
            let high = dense_id(&mut mapping, edge.high());
            remapped.push(Edge::new(low, high, edge.weight()));
        }

        let mut subgraph = Self::new(mapping.len());
        for edge in remapped {
            subgraph.push_edge(edge);
        }
        subgraph
    }

    /// Sums the weights of `edges` without risk of `i32` overflow.
    #[must_use]
    pub fn total_weight(edges: &[Edge]) -> i64 {
        edges.iter().map(|edge| i64::from(edge.weight())).sum()
    }

    /// Returns `true` when `candidate` is a spanning tree of this graph.
    ///
    /// The candidate must hold exactly `vertex_count - 1` edges, its induced
    /// subgraph must be connected, and it must be acyclic. Edges referencing
    /// vertices outside the graph make the candidate invalid. A graph with no
    /// vertices has no spanning tree, so every candidate is rejected.
    ///
    /// Weights are not compared against an optimum: a valid spanning tree is
    /// accepted whether or not it is minimal.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph};
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 1), (1, 2, 1), (0, 2, 1)])?;
    /// assert!(graph.is_valid_mst(&[Edge::new(0, 1, 1), Edge::new(1, 2, 1)]));
    /// assert!(!graph.is_valid_mst(&[Edge::new(0, 1, 1)]));
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn is_valid_mst(&self, candidate: &[Edge]) -> bool {
        let Some(expected) = self.vertex_count.checked_sub(1) else {
            return false;
        };
        if candidate.len() != expected {
            return false;
        }
        if !self.subgraph(candidate).is_connected() {
            return false;
        }
        !self.has_cycle(candidate)
    }

    /// Detects a cycle (or an out-of-range endpoint) in `candidate` with a
    /// fresh union-find pass.
    fn has_cycle(&self, candidate: &[Edge]) -> bool {
        let mut sets = UnionFind::new(self.vertex_count);
        for edge in candidate {
            if edge.high() >= self.vertex_count {
                return true;
            }
            if !sets.union(edge.low(), edge.high()) {
                return true;
            }
        }
        false
    }
}

fn dense_id(mapping: &mut HashMap<usize, usize>, vertex: usize) -> usize {
    let next = mapping.len();
    match mapping.entry(vertex) {
        Entry::Occupied(slot) => *slot.get(),
        Entry::Vacant(slot) => *slot.insert(next),
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph with {} vertices and {} edges:",
            self.vertex_count,
            self.edges.len()
        )?;
        for edge in &self.edges {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}
