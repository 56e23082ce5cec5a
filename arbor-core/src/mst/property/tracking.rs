//! Property 3: Tracking is observation only, and runs are repeatable.
//!
//! Each algorithm runs untracked once as a baseline, then tracked several
//! times with a fresh [`OperationTracker`]. Every run must select the exact
//! same edge list, and the recorded counters must be identical across runs
//! and consistent with the counting rules of each algorithm.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MstAlgorithm, OperationTracker};

use super::helpers::{ensure, expect_tree};
use super::types::{MstFixture, RepeatConfig};

/// Runs the tracking transparency property for the given fixture.
pub(super) fn run_tracking_transparency_property(fixture: &MstFixture) -> TestCaseResult {
    let config = RepeatConfig::load();
    let graph = fixture.graph();

    for algorithm in MstAlgorithm::ALL {
        let solver = algorithm.solver();
        let untracked = solver.find_mst(&graph);

        let mut first_tracker: Option<OperationTracker> = None;
        for run in 0..config.repetitions.max(1) {
            let mut tracker = OperationTracker::new();
            let tracked = solver.find_mst_with_tracking(&graph, &mut tracker);
            if tracked != untracked {
                return Err(TestCaseError::fail(format!(
                    "{algorithm} run {run}: tracked result {tracked:?} differs from \
                     untracked {untracked:?} ({})",
                    fixture.describe()
                )));
            }
            match first_tracker {
                None => first_tracker = Some(tracker),
                Some(first) => ensure(first == tracker, fixture, || {
                    format!("{algorithm} run {run}: counters {tracker:?} differ from {first:?}")
                })?,
            }
        }

        if let (Ok(tree), Some(tracker)) = (&untracked, first_tracker) {
            check_counters(algorithm, fixture, tree.len(), tracker)?;
        }
        if fixture.distribution.is_connected() {
            expect_tree(algorithm, fixture, untracked)?;
        }
    }
    Ok(())
}

fn check_counters(
    algorithm: MstAlgorithm,
    fixture: &MstFixture,
    tree_len: usize,
    tracker: OperationTracker,
) -> TestCaseResult {
    let accepted = tree_len as u64;
    let edge_count = fixture.edges.len() as u64;
    let comparisons = tracker.comparison_count();
    match algorithm {
        MstAlgorithm::Kruskal => {
            ensure(tracker.union_count() == accepted, fixture, || {
                format!(
                    "kruskal recorded {} unions for {accepted} accepted edges",
                    tracker.union_count()
                )
            })?;
            if accepted == 0 {
                return Ok(());
            }
            // Connectivity and sort, then four per scanned edge plus one
            // completion check per accepted edge.
            let scanned = comparisons.saturating_sub(2 + accepted);
            ensure(scanned.is_multiple_of(4), fixture, || {
                format!("kruskal comparison count {comparisons} is not 2 + 4s + a")
            })?;
            let scanned = scanned / 4;
            ensure(scanned >= accepted && scanned <= edge_count, fixture, || {
                format!("kruskal scanned {scanned} of {edge_count} edges for {accepted} accepted")
            })
        }
        MstAlgorithm::Prim => {
            ensure(tracker.union_count() == 0, fixture, || {
                format!("prim recorded {} unions", tracker.union_count())
            })?;
            // At least the connectivity check plus one push and two
            // extraction steps per accepted edge.
            let floor = 1 + 3 * accepted;
            ensure(comparisons >= floor, fixture, || {
                format!("prim recorded {comparisons} comparisons, expected at least {floor}")
            })
        }
    }
}
