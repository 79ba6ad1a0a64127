//! Undirected weighted graph model consumed by the spanning-tree algorithms.
//!
//! A [`Graph`] owns an insertion-ordered edge list and keeps an adjacency-list
//! projection in lockstep with it. A dense adjacency-matrix projection is
//! built lazily on first request and cached behind a read-write lock so a
//! fully constructed graph can be shared across threads; any mutation clears
//! the cache.
//!
//! The edge order is stable and observable: Borůvka's tie-breaking keeps the
//! earlier-seen edge, so two runs over the same graph are deterministic.

mod format;
mod generate;

use std::sync::{Arc, RwLock};

pub use self::format::{FormatError, FormatErrorCode, load_graph, read_graph, save_graph, write_graph};
pub use self::generate::{GenerateError, GraphSpec, generate};

/// An undirected weighted edge between two vertices.
///
/// The endpoints are stored in the order they were supplied; equality treats
/// them as an unordered pair.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// let forward = Edge::new(0, 1, 4);
/// let reverse = Edge::new(1, 0, 4);
/// assert_eq!(forward, reverse);
/// assert_ne!(forward, Edge::new(0, 1, 5));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    u: usize,
    v: usize,
    weight: i64,
}

impl Edge {
    /// Creates an edge between `u` and `v` with the given weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn new(u: usize, v: usize, weight: i64) -> Self { Self { u, v, weight } }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub fn u(&self) -> usize { self.u }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub fn v(&self) -> usize { self.v }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> i64 { self.weight }

    /// Returns the endpoints as an ordered `(min, max)` pair.
    #[must_use]
    pub fn endpoints(&self) -> (usize, usize) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }

    /// Returns `true` when the edge joins `a` and `b` in either orientation.
    #[must_use]
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints() && self.weight == other.weight
    }
}

impl Eq for Edge {}

/// Errors raised while mutating a [`Graph`].
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// An endpoint referenced a vertex outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// Both endpoints referenced the same vertex.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The vertex referenced by both endpoints.
        vertex: usize,
    },
    /// The edge weight was zero or negative.
    #[error("edge ({u}, {v}) has non-positive weight {weight}")]
    NonPositiveWeight {
        /// First endpoint as supplied.
        u: usize,
        /// Second endpoint as supplied.
        v: usize,
        /// The rejected weight.
        weight: i64,
    },
    /// An edge between the same unordered pair already exists.
    #[error("edge ({u}, {v}) already exists; the first insertion wins")]
    DuplicateEdge {
        /// First endpoint as supplied.
        u: usize,
        /// Second endpoint as supplied.
        v: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::VertexOutOfRange { .. } => GraphErrorCode::VertexOutOfRange,
            Self::SelfLoop { .. } => GraphErrorCode::SelfLoop,
            Self::NonPositiveWeight { .. } => GraphErrorCode::NonPositiveWeight,
            Self::DuplicateEdge { .. } => GraphErrorCode::DuplicateEdge,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// An endpoint referenced a vertex outside the graph.
    VertexOutOfRange,
    /// Both endpoints referenced the same vertex.
    SelfLoop,
    /// The edge weight was zero or negative.
    NonPositiveWeight,
    /// An edge between the same unordered pair already exists.
    DuplicateEdge,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexOutOfRange => "VERTEX_OUT_OF_RANGE",
            Self::SelfLoop => "SELF_LOOP",
            Self::NonPositiveWeight => "NON_POSITIVE_WEIGHT",
            Self::DuplicateEdge => "DUPLICATE_EDGE",
        }
    }
}

/// An undirected graph with positive integer edge weights.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 2)?;
/// graph.add_edge(1, 2, 3)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.is_connected());
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct Graph {
    vertices: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(usize, i64)>>,
    matrix: RwLock<Option<Arc<Vec<Vec<i64>>>>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
            matrix: RwLock::new(None),
        }
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of the graph, [`GraphError::SelfLoop`] when both endpoints are
    /// equal, [`GraphError::NonPositiveWeight`] when `weight < 1`, and
    /// [`GraphError::DuplicateEdge`] when the unordered pair already carries
    /// an edge (the first insertion wins).
    pub fn add_edge(&mut self, u: usize, v: usize, weight: i64) -> Result<(), GraphError> {
        for vertex in [u, v] {
            if vertex >= self.vertices {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertices,
                });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop { vertex: u });
        }
        if weight < 1 {
            return Err(GraphError::NonPositiveWeight { u, v, weight });
        }
        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge { u, v });
        }

        self.edges.push(Edge::new(u, v, weight));
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.invalidate_matrix();
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertices }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the edges in insertion order.
    ///
    /// The order is stable: the algorithms use it for deterministic
    /// tie-breaking.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the `(neighbour, weight)` pairs incident to `vertex`.
    ///
    /// # Panics
    /// Panics when `vertex >= vertex_count()`.
    #[must_use]
    pub fn adjacent(&self, vertex: usize) -> &[(usize, i64)] {
        &self.adjacency[vertex]
    }

    /// Returns `true` when an edge joins `u` and `v` in either orientation.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|row| row.iter().any(|&(neighbour, _)| neighbour == v))
    }

    /// Returns the weight of the edge joining `u` and `v`, if present.
    #[must_use]
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<i64> {
        self.adjacency.get(u)?.iter().find_map(|&(neighbour, weight)| {
            (neighbour == v).then_some(weight)
        })
    }

    /// Returns the dense adjacency-matrix projection.
    ///
    /// A weight of `0` means "no edge". The matrix is built on first request
    /// and cached; mutation invalidates the cache. Concurrent readers may
    /// race to build it, in which case one result wins and all observe a
    /// consistent matrix. A poisoned cache lock is recovered, as the cached
    /// value is only ever replaced wholesale.
    #[must_use]
    pub fn adjacency_matrix(&self) -> Arc<Vec<Vec<i64>>> {
        if let Some(matrix) = self
            .matrix
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
        {
            return Arc::clone(matrix);
        }

        let built = Arc::new(self.build_matrix());
        let mut slot = self
            .matrix
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Another reader may have built the matrix while we were; keep the
        // first one so every caller observes the same allocation.
        let winner = slot.get_or_insert_with(|| Arc::clone(&built));
        Arc::clone(winner)
    }

    fn build_matrix(&self) -> Vec<Vec<i64>> {
        let mut matrix = vec![vec![0_i64; self.vertices]; self.vertices];
        for edge in &self.edges {
            matrix[edge.u][edge.v] = edge.weight;
            matrix[edge.v][edge.u] = edge.weight;
        }
        matrix
    }

    fn invalidate_matrix(&mut self) {
        let mut slot = self
            .matrix
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = None;
    }

    /// Returns `true` when a traversal from vertex 0 reaches every vertex.
    ///
    /// Graphs with zero or one vertices are trivially connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.vertices <= 1 {
            return true;
        }

        let mut visited = vec![false; self.vertices];
        let mut queue = std::collections::VecDeque::from([0_usize]);
        visited[0] = true;
        let mut seen = 1_usize;

        while let Some(vertex) = queue.pop_front() {
            for &(neighbour, _) in &self.adjacency[vertex] {
                if !visited[neighbour] {
                    visited[neighbour] = true;
                    seen += 1;
                    queue.push_back(neighbour);
                }
            }
        }

        seen == self.vertices
    }

    /// Returns `true` when any edge carries a negative weight.
    ///
    /// Graphs built through [`Graph::add_edge`] never do; the check exists so
    /// the strict validation tier does not depend on how the graph was built.
    #[must_use]
    pub fn has_negative_weights(&self) -> bool {
        self.edges.iter().any(|edge| edge.weight < 0)
    }

    /// Returns the sum of all edge weights.
    #[must_use]
    pub fn total_weight(&self) -> i64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Returns the largest vertex degree, or 0 for an edgeless graph.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the smallest vertex degree, or 0 for an empty graph.
    #[must_use]
    pub fn min_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).min().unwrap_or(0)
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices,
            edges: self.edges.clone(),
            adjacency: self.adjacency.clone(),
            // The clone rebuilds its own matrix on demand.
            matrix: RwLock::new(None),
        }
    }
}
