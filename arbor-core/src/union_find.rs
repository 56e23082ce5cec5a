//! Union-find (disjoint set union) with path compression and union by rank.
//!
//! Kruskal's algorithm uses it to reject cycle-closing edges and
//! [`crate::Graph::is_valid_mst`] uses it to detect cycles in candidate
//! trees. Each caller builds a fresh structure per run.

/// Disjoint-set forest over the elements `0..len`.
///
/// # Examples
/// ```
/// use arbor_core::UnionFind;
///
/// let mut sets = UnionFind::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.union(1, 0));
/// assert!(sets.same_set(0, 1));
/// assert!(!sets.same_set(1, 2));
/// assert_eq!(sets.set_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of `node`'s set.
    ///
    /// Every element visited on the way to the root is re-pointed directly at
    /// the root.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The lower-rank root is attached beneath the higher-rank root. On a rank
    /// tie `right`'s root goes beneath `left`'s root and the surviving root's
    /// rank grows by one. Returns `false` when both were already in the same
    /// set.
    ///
    /// # Panics
    /// Panics when either element is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.sets -= 1;
        true
    }

    /// Returns `true` when `left` and `right` share a representative.
    ///
    /// # Panics
    /// Panics when either element is out of range.
    pub fn same_set(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }
}
