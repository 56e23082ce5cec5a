//! Error types for the arbor core library.
//!
//! Defines the error enums exposed by the public API together with stable,
//! machine-readable codes for logging and reporting surfaces.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident
                    $( { $($pattern:tt)* } )?
                    $( ( $($tuple:tt)* ) )?
                    => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(
                        Self::$ErrVariant
                            $( { $($pattern)* } )?
                            $( ( $($tuple)* ) )?
                            => $CodeTy::$CodeVariant,
                    )+
                }
            }
        }
    };
}

/// An error raised by [`crate::Graph`] and [`crate::Edge`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex index fell outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge was asked for the endpoint opposite a vertex it does not touch.
    #[error("vertex {vertex} is not an endpoint of edge {low}-{high}")]
    VertexNotOnEdge {
        /// The vertex supplied by the caller.
        vertex: usize,
        /// The smaller endpoint of the edge.
        low: usize,
        /// The larger endpoint of the edge.
        high: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex index fell outside the graph.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// An edge was queried with a vertex it does not touch.
        VertexNotOnEdge => VertexNotOnEdge { .. } => "GRAPH_VERTEX_NOT_ON_EDGE",
    }
}

/// Error returned when a minimum spanning tree cannot be computed.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The input graph is not connected, so no spanning tree exists.
    #[error(
        "graph is not connected: {reachable} of {vertex_count} vertices reachable from vertex 0"
    )]
    Disconnected {
        /// Number of vertices in the graph.
        vertex_count: usize,
        /// Number of vertices reached by the traversal from vertex 0.
        reachable: usize,
    },
    /// A graph or edge operation failed while building the tree.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The input graph is not connected.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// A graph or edge operation failed.
        Graph => Graph(..) => "MST_GRAPH",
    }
}

impl MstError {
    /// Retrieve the inner [`GraphErrorCode`] when the failure originated in a
    /// graph or edge operation.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            Self::Disconnected { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the MST entry points.
pub type Result<T> = core::result::Result<T, MstError>;
