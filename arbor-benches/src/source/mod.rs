//! Synthetic graphs for MST benchmarks.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first and the remaining edges join random distinct vertex pairs.

mod errors;
mod graph;

pub use errors::SyntheticError;
pub use graph::{Density, SyntheticGraphConfig, generate_graph};
