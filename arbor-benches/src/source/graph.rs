//! Seeded generator for connected weighted graphs.

use arbor_core::Graph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::SyntheticError;

const DEFAULT_MIN_WEIGHT: i32 = 1;
const DEFAULT_MAX_WEIGHT: i32 = 1_000;

/// Edge density presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    /// Roughly two edges per vertex.
    Sparse,
    /// Roughly half of all distinct vertex pairs.
    Dense,
}

impl Density {
    /// Both presets, sparse first.
    pub const ALL: [Self; 2] = [Self::Sparse, Self::Dense];

    /// Requested edge count for `vertex_count` vertices, never fewer than a
    /// spanning tree needs. Graphs with fewer than two vertices get no edges.
    #[must_use]
    pub const fn edge_count(self, vertex_count: usize) -> usize {
        if vertex_count < 2 {
            return 0;
        }
        let requested = match self {
            Self::Sparse => vertex_count.saturating_mul(2),
            // Half of V(V-1)/2 distinct pairs.
            Self::Dense => vertex_count.saturating_mul(vertex_count.saturating_sub(1)) >> 2,
        };
        let tree = vertex_count - 1;
        if requested < tree { tree } else { requested }
    }

    /// Short label used in benchmark ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Dense => "dense",
        }
    }
}

/// Configuration for [`generate_graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Total number of edges, spanning tree included.
    pub edge_count: usize,
    /// Smallest edge weight, inclusive.
    pub min_weight: i32,
    /// Largest edge weight, inclusive.
    pub max_weight: i32,
    /// Seed for the generator.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Configuration for a `density` preset with weights in `1..=1000`.
    #[must_use]
    pub const fn with_density(vertex_count: usize, density: Density, seed: u64) -> Self {
        Self {
            vertex_count,
            edge_count: density.edge_count(vertex_count),
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            seed,
        }
    }

    const fn validate(&self) -> Result<(), SyntheticError> {
        if self.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        let tree = self.vertex_count - 1;
        if self.edge_count < tree {
            return Err(SyntheticError::TooFewEdges {
                edge_count: self.edge_count,
                vertex_count: self.vertex_count,
            });
        }
        if self.vertex_count == 1 && self.edge_count > 0 {
            return Err(SyntheticError::NoDistinctPair {
                extra_edges: self.edge_count,
            });
        }
        if self.min_weight > self.max_weight {
            return Err(SyntheticError::InvalidWeightRange {
                min_weight: self.min_weight,
                max_weight: self.max_weight,
            });
        }
        Ok(())
    }
}

/// Generates a connected graph without self-loops.
///
/// The first `vertex_count - 1` edges form a random tree in which each vertex
/// `v > 0` hangs off a uniformly chosen earlier vertex. The remaining edges
/// join uniformly chosen distinct pairs, so parallel edges may occur. The same
/// configuration always yields the same graph.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is inconsistent.
///
/// # Examples
/// ```
/// use arbor_benches::source::{Density, SyntheticGraphConfig, generate_graph};
///
/// let graph = generate_graph(&SyntheticGraphConfig::with_density(50, Density::Sparse, 7))?;
/// assert_eq!(graph.vertex_count(), 50);
/// assert_eq!(graph.edge_count(), 100);
/// assert!(graph.is_connected());
/// # Ok::<(), arbor_benches::source::SyntheticError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
    config.validate()?;

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let weights = config.min_weight..=config.max_weight;
    let mut graph = Graph::new(config.vertex_count);

    for vertex in 1..config.vertex_count {
        let parent = rng.gen_range(0..vertex);
        graph.add_edge(parent, vertex, rng.gen_range(weights.clone()))?;
    }

    let extra = config.edge_count - (config.vertex_count - 1);
    for _ in 0..extra {
        let (from, to) = distinct_pair(&mut rng, config.vertex_count);
        graph.add_edge(from, to, rng.gen_range(weights.clone()))?;
    }

    Ok(graph)
}

/// Draws two different vertices; `vertex_count` must be at least two.
fn distinct_pair(rng: &mut SmallRng, vertex_count: usize) -> (usize, usize) {
    let from = rng.gen_range(0..vertex_count);
    let candidate = rng.gen_range(0..vertex_count - 1);
    let to = if candidate >= from {
        candidate + 1
    } else {
        candidate
    };
    (from, to)
}
