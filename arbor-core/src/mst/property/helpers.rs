//! Shared helpers for the MST property modules.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, MstAlgorithm, Result};

use super::types::MstFixture;

/// Path-halving find for verification passes that must not share code with
/// the union-find under test.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Unwraps an algorithm result, turning an error into a test failure that
/// names the algorithm and fixture.
pub(super) fn expect_tree(
    algorithm: MstAlgorithm,
    fixture: &MstFixture,
    result: Result<Vec<Edge>>,
) -> core::result::Result<Vec<Edge>, TestCaseError> {
    result.map_err(|err| {
        TestCaseError::fail(format!(
            "{algorithm} failed: {err} ({})",
            fixture.describe()
        ))
    })
}

/// Fails with `message` plus the fixture description when `condition` is
/// false.
pub(super) fn ensure(
    condition: bool,
    fixture: &MstFixture,
    message: impl FnOnce() -> String,
) -> TestCaseResult {
    if condition {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{} ({})",
            message(),
            fixture.describe()
        )))
    }
}
