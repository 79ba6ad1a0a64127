//! The spanning-tree algorithm family and its execution contract.
//!
//! Every algorithm consumes a read-only [`Graph`] view and produces an edge
//! sequence; it owns no graph storage and performs no I/O. Two tiers of entry
//! point exist by design:
//!
//! - [`Algorithm::find_mst`] is the soft tier: a disconnected graph yields the
//!   partial forest that was built (fewer than `V - 1` edges) rather than an
//!   error, and `V <= 1` yields an empty sequence. Callers detect
//!   disconnection by comparing the edge count against `V - 1`.
//! - [`Algorithm::find_spanning_tree`] is the strict tier: it validates the
//!   graph up front (non-empty, connected, no negative weights), times the
//!   run, and packages the outcome as a [`SpanningTree`].

mod boruvka;
mod kruskal;
mod prim;
mod reverse_delete;
mod second_best;

#[cfg(test)]
mod property;

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use crate::graph::{Edge, Graph};

/// The closed family of spanning-tree algorithms.
///
/// Variants are known at compile time; [`Algorithm::ALL`] is the registry the
/// tournament harness iterates over.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Iterative min-edge-per-component contraction.
    Boruvka,
    /// Sort all edges ascending, union-if-disjoint.
    Kruskal,
    /// Priority-queue frontier growth from vertex 0.
    Prim,
    /// Deletion testing from the heaviest edge down.
    ReverseDelete,
    /// Cheapest single-edge swap against the MST.
    SecondBest,
}

impl Algorithm {
    /// Every algorithm, in tournament order.
    pub const ALL: [Self; 5] = [
        Self::Boruvka,
        Self::Kruskal,
        Self::Prim,
        Self::ReverseDelete,
        Self::SecondBest,
    ];

    /// Returns the human-readable algorithm name used for reporting.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boruvka => "Boruvka's Algorithm",
            Self::Kruskal => "Kruskal's Algorithm",
            Self::Prim => "Prim's Algorithm",
            Self::ReverseDelete => "Reverse-Delete Algorithm",
            Self::SecondBest => "Second-Best MST",
        }
    }

    /// Computes a minimum spanning tree, soft tier.
    ///
    /// For a connected graph the result is exactly `max(V - 1, 0)` edges
    /// forming a minimum-weight spanning tree. For a disconnected graph the
    /// result is the partial forest built before the algorithm ran out of
    /// crossing edges; callers compare the length against `V - 1` to detect
    /// this. `V <= 1` yields an empty sequence.
    #[must_use]
    pub fn find_mst(self, graph: &Graph) -> Vec<Edge> {
        match self {
            Self::Boruvka => boruvka::find_mst(graph),
            Self::Kruskal => kruskal::find_mst(graph),
            Self::Prim => prim::find_mst(graph),
            Self::ReverseDelete => reverse_delete::find_mst(graph),
            Self::SecondBest => second_best::find_mst(graph),
        }
    }

    /// Computes a spanning tree with validation and timing, strict tier.
    ///
    /// The graph is validated before the algorithm runs, so the algorithms
    /// themselves never see an empty, disconnected, or negative-weighted
    /// graph through this entry point. Wall-clock time is recorded around the
    /// algorithm only, not the validation.
    ///
    /// # Errors
    /// Returns [`AlgorithmError::EmptyGraph`] for a zero-vertex graph,
    /// [`AlgorithmError::Disconnected`] when a traversal from vertex 0 does
    /// not reach every vertex, and [`AlgorithmError::NegativeWeight`] when
    /// any edge carries a negative weight.
    #[instrument(
        name = "algorithm.find_spanning_tree",
        err,
        skip(self, graph),
        fields(
            algorithm = self.name(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
        ),
    )]
    pub fn find_spanning_tree(self, graph: &Graph) -> Result<SpanningTree, AlgorithmError> {
        validate_graph(graph)?;

        let started = Instant::now();
        let edges = self.find_mst(graph);
        let elapsed = started.elapsed();

        let tree = SpanningTree {
            total_weight: total_weight(&edges),
            edges,
            elapsed,
            algorithm: self,
        };
        info!(
            edge_count = tree.edges.len(),
            total_weight = tree.total_weight,
            elapsed = ?tree.elapsed,
            "spanning tree computed"
        );
        Ok(tree)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sums the weights of `edges`.
///
/// Pure derived utility: the sum uses the same integer width as individual
/// weights and has no overflow handling; callers keep weight sums in range.
#[must_use]
pub fn total_weight(edges: &[Edge]) -> i64 {
    edges.iter().map(Edge::weight).sum()
}

/// Errors raised by the strict validation tier.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlgorithmError {
    /// The graph has no vertices.
    #[error("graph has no vertices")]
    EmptyGraph,
    /// A traversal from vertex 0 does not reach every vertex.
    #[error("graph is not connected")]
    Disconnected,
    /// An edge carries a negative weight.
    #[error("edge ({u}, {v}) has negative weight {weight}")]
    NegativeWeight {
        /// First endpoint of the offending edge.
        u: usize,
        /// Second endpoint of the offending edge.
        v: usize,
        /// The negative weight.
        weight: i64,
    },
}

impl AlgorithmError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> AlgorithmErrorCode {
        match self {
            Self::EmptyGraph => AlgorithmErrorCode::EmptyGraph,
            Self::Disconnected => AlgorithmErrorCode::Disconnected,
            Self::NegativeWeight { .. } => AlgorithmErrorCode::NegativeWeight,
        }
    }
}

/// Machine-readable error codes for [`AlgorithmError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AlgorithmErrorCode {
    /// The graph has no vertices.
    EmptyGraph,
    /// The graph is not connected.
    Disconnected,
    /// An edge carries a negative weight.
    NegativeWeight,
}

impl AlgorithmErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::Disconnected => "DISCONNECTED",
            Self::NegativeWeight => "NEGATIVE_WEIGHT",
        }
    }
}

fn validate_graph(graph: &Graph) -> Result<(), AlgorithmError> {
    if graph.vertex_count() == 0 {
        warn!("graph has no vertices, refusing to run");
        return Err(AlgorithmError::EmptyGraph);
    }
    if !graph.is_connected() {
        return Err(AlgorithmError::Disconnected);
    }
    if let Some(edge) = graph.edges().iter().find(|edge| edge.weight() < 0) {
        return Err(AlgorithmError::NegativeWeight {
            u: edge.u(),
            v: edge.v(),
            weight: edge.weight(),
        });
    }
    Ok(())
}

/// The outcome of a strict-tier spanning tree computation.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: i64,
    elapsed: Duration,
    algorithm: Algorithm,
}

impl SpanningTree {
    /// Returns the tree edges in the order the algorithm selected them.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the tree's edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the wall-clock time spent inside the algorithm.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the algorithm that produced this tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns `true` when this result spans `graph`.
    ///
    /// The check verifies the edge count equals `V - 1` and that every vertex
    /// is an endpoint of some tree edge. Graphs with zero or one vertices are
    /// spanned by an empty edge set.
    #[must_use]
    pub fn is_valid(&self, graph: &Graph) -> bool {
        let vertices = graph.vertex_count();
        if vertices <= 1 {
            return self.edges.is_empty();
        }
        if self.edges.len() != vertices - 1 {
            return false;
        }

        let mut covered = vec![false; vertices];
        for edge in &self.edges {
            if edge.u() >= vertices || edge.v() >= vertices {
                return false;
            }
            covered[edge.u()] = true;
            covered[edge.v()] = true;
        }
        covered.into_iter().all(|seen| seen)
    }
}
