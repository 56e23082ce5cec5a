//! Property-based tests for the Kruskal and Prim implementations.
//!
//! Checks both algorithms against an independent dense-matrix oracle,
//! validates the structural shape of every produced tree, and confirms that
//! operation tracking never changes the selected edges.

mod helpers;
mod oracle;
mod strategies;
mod structural;
mod tracking;
mod types;
