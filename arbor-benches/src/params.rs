//! Benchmark parameter types.

use std::fmt;

use crate::source::Density;

/// Parameters for an MST benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Edge density of the generated graph.
    pub density: Density,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V={},{}", self.vertex_count, self.density.as_str())
    }
}
