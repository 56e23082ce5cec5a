//! Type definitions for MST property-based tests.

use arbor_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::Graph;

/// Weight and topology mix used when generating a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge carries a distinct weight, so the optimum is unique.
    Unique,
    /// Edges draw from a pool of one to three weights, stressing tie-breaks.
    ManyIdentical,
    /// Random spanning tree plus a few extras, including parallel edges and
    /// self-loops.
    Sparse,
    /// Edge probability between 0.7 and 0.95 on a smaller vertex range.
    Dense,
    /// Weights straddle zero.
    Negative,
    /// Two to five components with no edges between them.
    Disconnected,
}

impl WeightDistribution {
    /// Returns `true` when generated graphs are guaranteed to be connected.
    pub(super) const fn is_connected(self) -> bool {
        !matches!(self, Self::Disconnected)
    }
}

/// Generated input for the MST properties.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated `(from, to, weight)` triples in insertion order.
    pub edges: Vec<(usize, usize, i32)>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the [`Graph`] described by this fixture.
    ///
    /// # Panics
    /// Panics when a generated endpoint is out of range, which indicates a
    /// broken strategy rather than an algorithm failure.
    pub(super) fn graph(&self) -> Graph {
        Graph::from_edges(self.vertex_count, self.edges.iter().copied())
            .unwrap_or_else(|err| panic!("strategy produced an invalid edge: {err}"))
    }

    /// Short description appended to failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

/// Number of repeated runs used by the determinism property.
pub(super) struct RepeatConfig {
    /// Number of times each algorithm runs per input.
    pub repetitions: usize,
}

impl RepeatConfig {
    /// Reads the repetition count from the shared property-test profile
    /// (`ARBOR_PBT_REPEATS`, default three).
    pub(super) fn load() -> Self {
        let profile = ProptestRunProfile::load(1, false);
        Self {
            repetitions: usize::try_from(profile.repeats()).unwrap_or(usize::MAX),
        }
    }
}
