//! Primitive-operation counters for comparing MST algorithms.
//!
//! A tracking run threads a `&mut OperationTracker` through the algorithm and
//! bumps its counters at fixed points. The counters are write-only from the
//! algorithm's perspective and never influence which edges are chosen.

/// Counts comparison-like operations and disjoint-set unions.
///
/// Counters saturate rather than overflow, so recording can never fail.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, Kruskal, OperationTracker, SpanningTreeAlgorithm};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 2)?;
/// graph.add_edge(1, 2, 3)?;
///
/// let mut tracker = OperationTracker::new();
/// let tree = Kruskal.find_mst_with_tracking(&graph, &mut tracker)?;
/// assert_eq!(tree.len(), 2);
/// assert!(tracker.comparison_count() > 0);
/// assert_eq!(tracker.union_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OperationTracker {
    comparisons: u64,
    unions: u64,
}

impl OperationTracker {
    /// Creates a tracker with both counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            comparisons: 0,
            unions: 0,
        }
    }

    /// Returns the number of recorded comparison-like operations.
    #[must_use]
    pub const fn comparison_count(&self) -> u64 {
        self.comparisons
    }

    /// Returns the number of recorded disjoint-set unions.
    #[must_use]
    pub const fn union_count(&self) -> u64 {
        self.unions
    }

    /// Records a single comparison.
    pub const fn record_comparison(&mut self) {
        self.record_comparisons(1);
    }

    /// Records `count` comparisons at once.
    pub const fn record_comparisons(&mut self, count: u64) {
        self.comparisons = self.comparisons.saturating_add(count);
    }

    /// Records a single union.
    pub const fn record_union(&mut self) {
        self.unions = self.unions.saturating_add(1);
    }

    /// Resets both counters to zero so the tracker can be reused.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }
}
