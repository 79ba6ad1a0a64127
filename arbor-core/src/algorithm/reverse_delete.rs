//! Reverse-Delete: deletion testing from the heaviest edge down.
//!
//! Intentionally the slowest of the family at O(E * (E + V)); it exists for
//! comparison, not for speed.

use std::cmp::Reverse;
use std::collections::VecDeque;

use crate::graph::{Edge, Graph};

pub(super) fn find_mst(graph: &Graph) -> Vec<Edge> {
    let vertices = graph.vertex_count();
    if vertices <= 1 {
        return Vec::new();
    }

    // Dropping an edge is kept only when it does not split a component, so on
    // disconnected input this degrades to a minimum spanning forest rather
    // than refusing to delete anything.
    let baseline = component_count(vertices, graph.edges());

    let mut order: Vec<Edge> = graph.edges().to_vec();
    order.sort_by_key(|edge| Reverse(edge.weight()));

    let mut kept = order.clone();
    for edge in &order {
        let without: Vec<Edge> = kept
            .iter()
            .copied()
            .filter(|candidate| candidate != edge)
            .collect();
        if component_count(vertices, &without) == baseline {
            kept = without;
        }
    }

    kept
}

/// Counts connected components of the subgraph formed by `edges` via
/// breadth-first traversal.
fn component_count(vertices: usize, edges: &[Edge]) -> usize {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); vertices];
    for edge in edges {
        adjacency[edge.u()].push(edge.v());
        adjacency[edge.v()].push(edge.u());
    }

    let mut visited = vec![false; vertices];
    let mut count = 0;
    for start in 0..vertices {
        if visited[start] {
            continue;
        }
        count += 1;
        visited[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            for &neighbour in &adjacency[vertex] {
                if !visited[neighbour] {
                    visited[neighbour] = true;
                    queue.push_back(neighbour);
                }
            }
        }
    }
    count
}
