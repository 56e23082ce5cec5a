//! Dense-matrix Prim oracle for MST property verification.
//!
//! Collapses parallel edges to their lightest copy, drops self-loops, and runs
//! the textbook `O(V^2)` Prim over an adjacency matrix. It shares no code with
//! the heap- and union-find-based implementations, so agreement on total
//! weight is meaningful.

/// Computes the minimum spanning tree weight of the described graph.
///
/// Returns `None` when the graph is disconnected. A graph with at most one
/// vertex has weight zero.
pub(super) fn dense_prim_weight(
    vertex_count: usize,
    edges: &[(usize, usize, i32)],
) -> Option<i64> {
    if vertex_count <= 1 {
        return Some(0);
    }

    let mut matrix: Vec<Option<i64>> = vec![None; vertex_count * vertex_count];
    for &(from, to, weight) in edges {
        if from == to {
            continue;
        }
        let weight = i64::from(weight);
        for slot in [from * vertex_count + to, to * vertex_count + from] {
            matrix[slot] = Some(matrix[slot].map_or(weight, |current| current.min(weight)));
        }
    }

    let mut in_tree = vec![false; vertex_count];
    let mut best: Vec<Option<i64>> = vec![None; vertex_count];
    best[0] = Some(0);
    let mut total = 0;

    for _ in 0..vertex_count {
        let next = (0..vertex_count)
            .filter(|&vertex| !in_tree[vertex])
            .filter_map(|vertex| best[vertex].map(|cost| (cost, vertex)))
            .min()?;
        let (cost, vertex) = next;
        in_tree[vertex] = true;
        total += cost;

        for other in 0..vertex_count {
            if in_tree[other] {
                continue;
            }
            if let Some(weight) = matrix[vertex * vertex_count + other] {
                best[other] = Some(best[other].map_or(weight, |current| current.min(weight)));
            }
        }
    }

    Some(total)
}
