//! Seeded graph generators for tests, benchmarks, and the CLI.
//!
//! Every generator is deterministic given a seed. Generators that promise a
//! connected result build a random spanning tree first and only then add
//! extra edges, so connectivity never depends on probability.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Graph, GraphError};

/// Describes a graph to generate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum GraphSpec {
    /// Connected graph with approximately `edges` edges.
    ///
    /// The edge count is clamped to `[vertices - 1, vertices * (vertices - 1) / 2]`
    /// so the result is always a connected simple graph.
    Random {
        /// Number of vertices.
        vertices: usize,
        /// Requested number of edges.
        edges: usize,
        /// Inclusive upper bound for edge weights.
        max_weight: i64,
    },
    /// Complete graph on `vertices` vertices.
    Complete {
        /// Number of vertices.
        vertices: usize,
        /// Inclusive upper bound for edge weights.
        max_weight: i64,
    },
    /// Connected graph where each non-tree pair appears with probability `density`.
    Sparse {
        /// Number of vertices.
        vertices: usize,
        /// Per-pair edge probability in `[0, 1]`.
        density: f64,
        /// Inclusive upper bound for edge weights.
        max_weight: i64,
    },
    /// Same construction as [`GraphSpec::Sparse`]; conventionally used with a
    /// density close to 1.
    Dense {
        /// Number of vertices.
        vertices: usize,
        /// Per-pair edge probability in `[0, 1]`.
        density: f64,
        /// Inclusive upper bound for edge weights.
        max_weight: i64,
    },
    /// Random spanning tree: exactly `vertices - 1` edges.
    Tree {
        /// Number of vertices.
        vertices: usize,
        /// Inclusive upper bound for edge weights.
        max_weight: i64,
    },
    /// Grid of `rows * cols` vertices with 4-neighbour connectivity.
    Grid {
        /// Number of grid rows.
        rows: usize,
        /// Number of grid columns.
        cols: usize,
        /// Inclusive upper bound for edge weights.
        max_weight: i64,
    },
}

impl GraphSpec {
    fn max_weight(&self) -> i64 {
        match *self {
            Self::Random { max_weight, .. }
            | Self::Complete { max_weight, .. }
            | Self::Sparse { max_weight, .. }
            | Self::Dense { max_weight, .. }
            | Self::Tree { max_weight, .. }
            | Self::Grid { max_weight, .. } => max_weight,
        }
    }
}

/// Errors raised while generating a graph.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum GenerateError {
    /// The weight bound must admit at least one positive weight.
    #[error("max_weight must be at least 1 (got {max_weight})")]
    NonPositiveMaxWeight {
        /// The rejected bound.
        max_weight: i64,
    },
    /// The edge probability fell outside `[0, 1]`.
    #[error("density {density} is not a probability in [0, 1]")]
    DensityOutOfRange {
        /// The rejected density.
        density: f64,
    },
    /// Graph construction rejected a generated edge, indicating a logic error
    /// in a generator.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Generates the graph described by `spec`, deterministically for a seed.
///
/// # Errors
/// Returns [`GenerateError::NonPositiveMaxWeight`] when the weight bound is
/// below 1 and [`GenerateError::DensityOutOfRange`] when a density is not a
/// probability.
///
/// # Examples
/// ```
/// use arbor_core::{GraphSpec, generate};
///
/// let spec = GraphSpec::Sparse { vertices: 20, density: 0.2, max_weight: 50 };
/// let graph = generate(&spec, 7)?;
/// assert_eq!(graph.vertex_count(), 20);
/// assert!(graph.is_connected());
/// # Ok::<(), arbor_core::GenerateError>(())
/// ```
pub fn generate(spec: &GraphSpec, seed: u64) -> Result<Graph, GenerateError> {
    let max_weight = spec.max_weight();
    if max_weight < 1 {
        return Err(GenerateError::NonPositiveMaxWeight { max_weight });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    match *spec {
        GraphSpec::Random {
            vertices, edges, ..
        } => generate_random(vertices, edges, max_weight, &mut rng),
        GraphSpec::Complete { vertices, .. } => generate_complete(vertices, max_weight, &mut rng),
        GraphSpec::Sparse {
            vertices, density, ..
        }
        | GraphSpec::Dense {
            vertices, density, ..
        } => generate_probabilistic(vertices, density, max_weight, &mut rng),
        GraphSpec::Tree { vertices, .. } => generate_tree(vertices, max_weight, &mut rng),
        GraphSpec::Grid { rows, cols, .. } => generate_grid(rows, cols, max_weight, &mut rng),
    }
}

/// Adds a random spanning tree over all vertices via a shuffled walk.
fn add_spanning_tree(
    graph: &mut Graph,
    max_weight: i64,
    rng: &mut SmallRng,
) -> Result<(), GenerateError> {
    let vertices = graph.vertex_count();
    let mut order: Vec<usize> = (0..vertices).collect();
    shuffle(&mut order, rng);
    for window in order.windows(2) {
        let (prev, next) = (window[0], window[1]);
        graph.add_edge(prev, next, random_weight(max_weight, rng))?;
    }
    Ok(())
}

fn generate_tree(
    vertices: usize,
    max_weight: i64,
    rng: &mut SmallRng,
) -> Result<Graph, GenerateError> {
    let mut graph = Graph::new(vertices);
    add_spanning_tree(&mut graph, max_weight, rng)?;
    Ok(graph)
}

fn generate_random(
    vertices: usize,
    edges: usize,
    max_weight: i64,
    rng: &mut SmallRng,
) -> Result<Graph, GenerateError> {
    let mut graph = Graph::new(vertices);
    add_spanning_tree(&mut graph, max_weight, rng)?;

    let complete = vertices * vertices.saturating_sub(1) / 2;
    let target = edges.clamp(graph.edge_count(), complete);
    while graph.edge_count() < target {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        if u != v && !graph.has_edge(u, v) {
            graph.add_edge(u, v, random_weight(max_weight, rng))?;
        }
    }
    Ok(graph)
}

fn generate_complete(
    vertices: usize,
    max_weight: i64,
    rng: &mut SmallRng,
) -> Result<Graph, GenerateError> {
    let mut graph = Graph::new(vertices);
    for u in 0..vertices {
        for v in (u + 1)..vertices {
            graph.add_edge(u, v, random_weight(max_weight, rng))?;
        }
    }
    Ok(graph)
}

fn generate_probabilistic(
    vertices: usize,
    density: f64,
    max_weight: i64,
    rng: &mut SmallRng,
) -> Result<Graph, GenerateError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(GenerateError::DensityOutOfRange { density });
    }

    let mut graph = Graph::new(vertices);
    add_spanning_tree(&mut graph, max_weight, rng)?;
    for u in 0..vertices {
        for v in (u + 1)..vertices {
            if !graph.has_edge(u, v) && rng.gen_bool(density) {
                graph.add_edge(u, v, random_weight(max_weight, rng))?;
            }
        }
    }
    Ok(graph)
}

fn generate_grid(
    rows: usize,
    cols: usize,
    max_weight: i64,
    rng: &mut SmallRng,
) -> Result<Graph, GenerateError> {
    let mut graph = Graph::new(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let vertex = row * cols + col;
            if col + 1 < cols {
                graph.add_edge(vertex, vertex + 1, random_weight(max_weight, rng))?;
            }
            if row + 1 < rows {
                graph.add_edge(vertex, vertex + cols, random_weight(max_weight, rng))?;
            }
        }
    }
    Ok(graph)
}

fn random_weight(max_weight: i64, rng: &mut SmallRng) -> i64 {
    rng.gen_range(1..=max_weight)
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
