//! Strategy builders for MST property-based tests.
//!
//! Each generator draws from a seeded [`SmallRng`] so a failing case can be
//! replayed from its seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates fixtures across every distribution, biased towards tied
/// weights.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates only connected fixtures.
pub(super) fn connected_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    mst_fixture_strategy().prop_filter("connected graphs only", |fixture| {
        fixture.distribution.is_connected()
    })
}

/// Generates a fixture for one distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique(rng),
        WeightDistribution::ManyIdentical => generate_identical(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Negative => generate_negative(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

// ── Connected builders ──────────────────────────────────────────────────

/// Accumulates `(from, to, weight)` triples.
#[derive(Default)]
struct EdgeBuilder {
    edges: Vec<(usize, usize, i32)>,
}

impl EdgeBuilder {
    fn push(&mut self, from: usize, to: usize, weight: i32) {
        self.edges.push((from, to, weight));
    }

    /// Adds a random spanning tree over `offset..offset + size` so the range
    /// is connected regardless of later edge choices.
    fn spanning_tree(
        &mut self,
        offset: usize,
        size: usize,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> i32,
    ) {
        let mut order: Vec<usize> = (offset..offset + size).collect();
        shuffle(&mut order, rng);
        for index in 1..order.len() {
            let attach = order[rng.gen_range(0..index)];
            let w = weight(rng);
            self.push(attach, order[index], w);
        }
    }

    /// Adds each pair in `offset..offset + size` with probability
    /// `probability`.
    fn random_pairs(
        &mut self,
        offset: usize,
        size: usize,
        probability: f64,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> i32,
    ) {
        for i in offset..offset + size {
            for j in (i + 1)..offset + size {
                if rng.gen_bool(probability) {
                    let w = weight(rng);
                    self.push(j, i, w);
                }
            }
        }
    }

    fn finish(
        mut self,
        vertex_count: usize,
        distribution: WeightDistribution,
        rng: &mut SmallRng,
    ) -> MstFixture {
        shuffle(&mut self.edges, rng);
        MstFixture {
            vertex_count,
            edges: self.edges,
            distribution,
        }
    }
}

/// Builds a connected graph: a random spanning tree plus random pairs.
fn connected_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    probability: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> i32,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let probability = rng.gen_range(probability.0..=probability.1);
    let mut builder = EdgeBuilder::default();
    builder.spanning_tree(0, vertex_count, rng, &mut weight);
    builder.random_pairs(0, vertex_count, probability, rng, &mut weight);
    builder.finish(vertex_count, distribution, rng)
}

fn generate_unique(rng: &mut SmallRng) -> MstFixture {
    let mut fixture = connected_graph(
        rng,
        MAX_VERTICES,
        (0.1, 0.5),
        WeightDistribution::Unique,
        |_| 0,
    );
    let mut weights: Vec<i32> = (0..).take(fixture.edges.len()).collect();
    shuffle(&mut weights, rng);
    for (edge, weight) in fixture.edges.iter_mut().zip(weights) {
        edge.2 = weight.saturating_mul(3).saturating_add(1);
    }
    fixture
}

fn generate_identical(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i32> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    connected_graph(
        rng,
        MAX_VERTICES,
        (0.2, 0.6),
        WeightDistribution::ManyIdentical,
        move |r| pool[r.gen_range(0..pool.len())],
    )
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = EdgeBuilder::default();
    builder.spanning_tree(0, vertex_count, rng, |r| r.gen_range(1..=100));

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        // Self-loops and parallel edges are intentional here.
        builder.push(from, to, rng.gen_range(1..=100));
    }
    builder.finish(vertex_count, WeightDistribution::Sparse, rng)
}

fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    connected_graph(
        rng,
        DENSE_MAX_VERTICES,
        (0.7, 0.95),
        WeightDistribution::Dense,
        |r| r.gen_range(1..=1_000),
    )
}

fn generate_negative(rng: &mut SmallRng) -> MstFixture {
    connected_graph(
        rng,
        MAX_VERTICES,
        (0.1, 0.5),
        WeightDistribution::Negative,
        |r| r.gen_range(-100..=100),
    )
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates two to five components with no edges between them. Vertex ids
/// are shuffled so component boundaries are not contiguous.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let vertex_count: usize = sizes.iter().sum();

    let mut builder = EdgeBuilder::default();
    let mut offset = 0;
    for &size in &sizes {
        builder.spanning_tree(offset, size, rng, |r| r.gen_range(1..=100));
        let probability = rng.gen_range(0.0..=0.5);
        builder.random_pairs(offset, size, probability, rng, |r| r.gen_range(1..=100));
        offset += size;
    }

    let mut relabel: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut relabel, rng);
    for edge in &mut builder.edges {
        edge.0 = relabel[edge.0];
        edge.1 = relabel[edge.1];
    }
    builder.finish(vertex_count, WeightDistribution::Disconnected, rng)
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Negative),
            1 => Just(Self::Disconnected),
        ]
    }
}
