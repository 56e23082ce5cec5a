//! Benchmark support crate for arbor.
//!
//! Provides a seeded synthetic graph generator and the parameter types used
//! by the Criterion benchmarks comparing Kruskal and Prim.

pub mod error;
pub mod params;
pub mod source;
