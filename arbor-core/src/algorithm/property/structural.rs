//! Structural invariant verification.
//!
//! For the edge sequence produced by every algorithm on any fixture, verifies:
//!
//! - **Provenance** — every returned edge exists in the graph with the same
//!   weight.
//! - **Acyclicity** — no returned edge closes a cycle.
//! - **Edge count** — the expected count for the algorithm's reach: `V - C`
//!   for the forest-producing algorithms, the size of vertex 0's component
//!   minus one for Prim, and `V - 1` for Second-Best on connected input.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::algorithm::Algorithm;
use crate::graph::{Edge, Graph};
use crate::union_find::UnionFind;

use super::types::GraphFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_property(fixture: &GraphFixture) -> TestCaseResult {
    for algorithm in Algorithm::ALL {
        let edges = algorithm.find_mst(&fixture.graph);

        validate_provenance(algorithm, &fixture.graph, &edges)?;
        validate_acyclicity(algorithm, fixture.graph.vertex_count(), &edges)?;
        validate_edge_count(algorithm, fixture, &edges)?;
    }
    Ok(())
}

fn fail(algorithm: Algorithm, fixture_note: &str) -> TestCaseError {
    TestCaseError::fail(format!("{}: {fixture_note}", algorithm.name()))
}

/// Verifies every returned edge exists in the graph with a matching weight.
fn validate_provenance(
    algorithm: Algorithm,
    graph: &Graph,
    edges: &[Edge],
) -> TestCaseResult {
    for edge in edges {
        if graph.edge_weight(edge.u(), edge.v()) != Some(edge.weight()) {
            return Err(fail(
                algorithm,
                &format!(
                    "edge ({}, {}, {}) does not exist in the input graph",
                    edge.u(),
                    edge.v(),
                    edge.weight(),
                ),
            ));
        }
    }
    Ok(())
}

/// Detects cycles in the output using a fresh union-find.
fn validate_acyclicity(
    algorithm: Algorithm,
    vertex_count: usize,
    edges: &[Edge],
) -> TestCaseResult {
    let mut components = UnionFind::new(vertex_count);
    for edge in edges {
        if !components.unite(edge.u(), edge.v()) {
            return Err(fail(
                algorithm,
                &format!("edge ({}, {}) closes a cycle", edge.u(), edge.v()),
            ));
        }
    }
    Ok(())
}

/// Verifies the returned edge count matches the algorithm's reach.
fn validate_edge_count(
    algorithm: Algorithm,
    fixture: &GraphFixture,
    edges: &[Edge],
) -> TestCaseResult {
    let vertices = fixture.graph.vertex_count();
    let expected = match algorithm {
        // Prim grows a single tree from vertex 0 and never leaves its
        // component.
        Algorithm::Prim => zero_component_size(&fixture.graph).saturating_sub(1),
        _ => vertices.saturating_sub(fixture.component_count),
    };

    if edges.len() != expected {
        return Err(fail(
            algorithm,
            &format!(
                "edge count {} != expected {expected} (vertices={vertices}, \
                 components={}, distribution={:?})",
                edges.len(),
                fixture.component_count,
                fixture.distribution,
            ),
        ));
    }
    Ok(())
}

/// Returns the size of the component containing vertex 0.
fn zero_component_size(graph: &Graph) -> usize {
    let vertices = graph.vertex_count();
    if vertices == 0 {
        return 0;
    }
    let mut components = UnionFind::new(vertices);
    for edge in graph.edges() {
        components.unite(edge.u(), edge.v());
    }
    let root = components.find(0);
    (0..vertices)
        .filter(|&vertex| components.find(vertex) == root)
        .count()
}
