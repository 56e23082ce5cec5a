//! Property 2: Structural invariants of every produced tree.
//!
//! For a connected input, each algorithm's output must:
//!
//! - hold exactly `V - 1` edges;
//! - contain no self-loops and no cycles;
//! - touch every vertex;
//! - draw every edge from the input, respecting multiplicity;
//! - be accepted by [`crate::Graph::is_valid_mst`].

use std::collections::HashMap;

use proptest::test_runner::TestCaseResult;

use crate::{Edge, MstAlgorithm};

use super::helpers::{ensure, expect_tree, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
///
/// Disconnected fixtures are skipped; the equivalence property covers them.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    if !fixture.distribution.is_connected() {
        return Ok(());
    }
    let graph = fixture.graph();

    for algorithm in MstAlgorithm::ALL {
        let solver = algorithm.solver();
        let tree = expect_tree(algorithm, fixture, solver.find_mst(&graph))?;

        let expected = fixture.vertex_count.saturating_sub(1);
        ensure(tree.len() == expected, fixture, || {
            format!("{algorithm} returned {} edges, expected {expected}", tree.len())
        })?;
        validate_forest(algorithm, fixture, &tree)?;
        validate_spans(algorithm, fixture, &tree)?;
        validate_drawn_from_input(algorithm, fixture, graph.edges(), &tree)?;
        ensure(solver.is_valid_mst(&graph, &tree), fixture, || {
            format!("{algorithm} output rejected by is_valid_mst")
        })?;
    }
    Ok(())
}

fn validate_forest(
    algorithm: MstAlgorithm,
    fixture: &MstFixture,
    tree: &[Edge],
) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    for (i, edge) in tree.iter().enumerate() {
        ensure(!edge.is_self_loop(), fixture, || {
            format!("{algorithm} edge {i}: self-loop {edge}")
        })?;
        let low = find_root(&mut parent, edge.low());
        let high = find_root(&mut parent, edge.high());
        ensure(low != high, fixture, || {
            format!("{algorithm} edge {i}: {edge} closes a cycle")
        })?;
        parent[high] = low;
    }
    Ok(())
}

fn validate_spans(
    algorithm: MstAlgorithm,
    fixture: &MstFixture,
    tree: &[Edge],
) -> TestCaseResult {
    let mut touched = vec![false; fixture.vertex_count];
    for edge in tree {
        touched[edge.low()] = true;
        touched[edge.high()] = true;
    }
    let missing = touched.iter().filter(|&&seen| !seen).count();
    ensure(fixture.vertex_count <= 1 || missing == 0, fixture, || {
        format!("{algorithm} tree misses {missing} vertices")
    })
}

fn validate_drawn_from_input(
    algorithm: MstAlgorithm,
    fixture: &MstFixture,
    input: &[Edge],
    tree: &[Edge],
) -> TestCaseResult {
    let mut available: HashMap<Edge, usize> = HashMap::new();
    for edge in input {
        *available.entry(*edge).or_default() += 1;
    }
    for edge in tree {
        let remaining = available.get_mut(edge).filter(|count| **count > 0);
        ensure(remaining.is_some(), fixture, || {
            format!("{algorithm} returned {edge}, which is not an unused input edge")
        })?;
        if let Some(count) = remaining {
            *count -= 1;
        }
    }
    Ok(())
}
