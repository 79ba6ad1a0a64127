//! Type definitions for the algorithm property tests.

use crate::graph::Graph;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during generation, producing inputs
/// that stress different aspects of the algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge weight is distinct, so the MST is unique.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse connected graph with few extra edges beyond a spanning tree.
    Sparse,
    /// Dense graph approaching a complete graph.
    Dense,
    /// Multiple components with no crossing edges.
    Disconnected,
}

/// Fixture for algorithm property tests.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// The generated graph.
    pub graph: Graph,
    /// Number of connected components in the input.
    pub component_count: usize,
    /// Weight distribution used during generation, kept for failure output.
    pub distribution: WeightDistribution,
}
