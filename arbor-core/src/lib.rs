//! Arbor core library.
//!
//! Weighted undirected graphs and two minimum spanning tree algorithms,
//! [`Kruskal`] and [`Prim`], with optional operation counting through
//! [`OperationTracker`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge;
mod error;
mod graph;
mod mst;
mod tracker;
mod union_find;


pub use crate::{
    edge::Edge,
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode, Result},
    graph::Graph,
    mst::{Kruskal, MstAlgorithm, Prim, SpanningTreeAlgorithm},
    tracker::OperationTracker,
    union_find::UnionFind,
};
