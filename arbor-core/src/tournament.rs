//! Tournament accumulator for comparing algorithm runs.
//!
//! The accumulator is an explicitly passed value, not ambient state: the
//! harness owns one per comparison, records every strict-tier run into it,
//! and hands it to the presentation layer for rendering. Ranking is by
//! elapsed time, then by total weight.

use std::time::Duration;

use tracing::instrument;

use crate::algorithm::{Algorithm, AlgorithmError, SpanningTree};
use crate::graph::Graph;

/// One recorded algorithm run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TournamentEntry {
    algorithm: Algorithm,
    elapsed: Duration,
    total_weight: i64,
    spanning: bool,
}

impl TournamentEntry {
    /// Returns the algorithm that produced this entry.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the wall-clock time of the run.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the total weight of the produced tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns `true` when the produced edge set spanned the graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn spanning(&self) -> bool { self.spanning }
}

/// Accumulates algorithm runs for one named comparison.
///
/// # Examples
/// ```
/// use arbor_core::{Algorithm, Graph, Tournament};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(1, 2, 2)?;
///
/// let mut tournament = Tournament::new("example");
/// for algorithm in Algorithm::ALL {
///     let tree = algorithm.find_spanning_tree(&graph)?;
///     tournament.record(&graph, &tree);
/// }
/// assert_eq!(tournament.entries().len(), Algorithm::ALL.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Tournament {
    name: String,
    entries: Vec<TournamentEntry>,
}

impl Tournament {
    /// Creates an empty tournament for a named comparison.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Returns the comparison name.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Records a strict-tier run, validating the tree against `graph`.
    pub fn record(&mut self, graph: &Graph, tree: &SpanningTree) {
        self.entries.push(TournamentEntry {
            algorithm: tree.algorithm(),
            elapsed: tree.elapsed(),
            total_weight: tree.total_weight(),
            spanning: tree.is_valid(graph),
        });
    }

    /// Returns the entries in recording order.
    #[must_use]
    #[rustfmt::skip]
    pub fn entries(&self) -> &[TournamentEntry] { &self.entries }

    /// Returns the entries ranked by elapsed time, ties broken by weight.
    #[must_use]
    pub fn ranking(&self) -> Vec<TournamentEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by_key(|entry| (entry.elapsed, entry.total_weight));
        ranked
    }

    /// Returns the entry with the smallest elapsed time.
    #[must_use]
    pub fn fastest(&self) -> Option<&TournamentEntry> {
        self.entries.iter().min_by_key(|entry| entry.elapsed)
    }

    /// Returns the entry with the smallest total weight, ties broken by time.
    #[must_use]
    pub fn best_weight(&self) -> Option<&TournamentEntry> {
        self.entries
            .iter()
            .min_by_key(|entry| (entry.total_weight, entry.elapsed))
    }

    /// Discards all recorded entries, keeping the name.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Runs every algorithm sequentially against `graph` and records the results.
///
/// # Errors
/// Returns the first [`AlgorithmError`] raised by the strict validation tier.
/// Validation is graph-level, so in practice either every algorithm passes or
/// the first one fails.
#[instrument(
    name = "tournament.run",
    err,
    skip(graph),
    fields(name = name, vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn run_tournament(name: &str, graph: &Graph) -> Result<Tournament, AlgorithmError> {
    let mut tournament = Tournament::new(name);
    for algorithm in Algorithm::ALL {
        let tree = algorithm.find_spanning_tree(graph)?;
        tournament.record(graph, &tree);
    }
    Ok(tournament)
}
