//! Prim's algorithm: priority-queue frontier growth from vertex 0.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{Edge, Graph};

pub(super) fn find_mst(graph: &Graph) -> Vec<Edge> {
    let vertices = graph.vertex_count();
    let mut mst = Vec::new();

    if vertices <= 1 {
        return mst;
    }

    let mut in_tree = vec![false; vertices];
    let mut key = vec![i64::MAX; vertices];
    let mut parent: Vec<Option<usize>> = vec![None; vertices];
    let mut frontier = BinaryHeap::new();

    key[0] = 0;
    frontier.push(Reverse((0_i64, 0_usize)));

    while let Some(Reverse((_, vertex))) = frontier.pop() {
        // Lazy deletion: stale heap entries for already-claimed vertices are
        // skipped rather than removed eagerly.
        if in_tree[vertex] {
            continue;
        }
        in_tree[vertex] = true;

        if let Some(from) = parent[vertex] {
            mst.push(Edge::new(from, vertex, key[vertex]));
        }

        for &(neighbour, weight) in graph.adjacent(vertex) {
            if !in_tree[neighbour] && weight < key[neighbour] {
                key[neighbour] = weight;
                parent[neighbour] = Some(vertex);
                frontier.push(Reverse((weight, neighbour)));
            }
        }
    }

    mst
}
