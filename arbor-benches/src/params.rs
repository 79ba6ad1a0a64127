//! Benchmark parameter types.

use std::fmt;

/// Parameters for a spanning-tree benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the generated graph.
    pub vertices: usize,
    /// Number of edges in the generated graph.
    pub edges: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={},e={}", self.vertices, self.edges)
    }
}
