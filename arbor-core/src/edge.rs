//! Weighted undirected edges.

use std::fmt;

use crate::error::GraphError;

/// A weighted undirected edge in canonical form (`low <= high`).
///
/// The endpoints are ordered at construction, so two edges joining the same
/// unordered pair with the same weight compare and hash equal regardless of
/// the argument order used to build them. Negative and zero weights are
/// valid.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// let edge = Edge::new(3, 1, -4);
/// assert_eq!((edge.low(), edge.high(), edge.weight()), (1, 3, -4));
/// assert_eq!(edge, Edge::new(1, 3, -4));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    low: usize,
    high: usize,
    weight: i32,
}

impl Edge {
    /// Creates an edge between `left` and `right` carrying `weight`.
    #[must_use]
    pub const fn new(left: usize, right: usize, weight: i32) -> Self {
        let (low, high) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self { low, high, weight }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    pub const fn low(&self) -> usize {
        self.low
    }

    /// Returns the larger endpoint id.
    #[must_use]
    pub const fn high(&self) -> usize {
        self.high
    }

    /// Returns the edge weight.
    #[must_use]
    pub const fn weight(&self) -> i32 {
        self.weight
    }

    /// Returns `true` when the edge joins a vertex to itself.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.low == self.high
    }

    /// Returns `true` when `vertex` is one of the endpoints.
    #[must_use]
    pub const fn contains(&self, vertex: usize) -> bool {
        self.low == vertex || self.high == vertex
    }

    /// Returns `true` when the edge joins `first` and `second`, in either
    /// order.
    #[must_use]
    pub const fn connects(&self, first: usize, second: usize) -> bool {
        (self.low == first && self.high == second) || (self.low == second && self.high == first)
    }

    /// Returns `true` when both edges join the same unordered vertex pair,
    /// ignoring weights.
    #[must_use]
    pub const fn is_same_pair(&self, other: &Self) -> bool {
        self.low == other.low && self.high == other.high
    }

    /// Returns the endpoint opposite `vertex`.
    ///
    /// A self-loop returns `vertex` itself.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotOnEdge`] when `vertex` is not an
    /// endpoint of this edge.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, GraphError};
    ///
    /// let edge = Edge::new(2, 5, 7);
    /// assert_eq!(edge.other_vertex(5), Ok(2));
    /// assert!(matches!(
    ///     edge.other_vertex(4),
    ///     Err(GraphError::VertexNotOnEdge { vertex: 4, low: 2, high: 5 })
    /// ));
    /// ```
    pub const fn other_vertex(&self, vertex: usize) -> Result<usize, GraphError> {
        if vertex == self.low {
            Ok(self.high)
        } else if vertex == self.high {
            Ok(self.low)
        } else {
            Err(GraphError::VertexNotOnEdge {
                vertex,
                low: self.low,
                high: self.high,
            })
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} (w={})", self.low, self.high, self.weight)
    }
}
