//! Kruskal's algorithm: sort ascending, union-if-disjoint.

use crate::graph::{Edge, Graph};
use crate::union_find::UnionFind;

pub(super) fn find_mst(graph: &Graph) -> Vec<Edge> {
    let vertices = graph.vertex_count();
    let mut mst = Vec::new();

    if vertices <= 1 {
        return mst;
    }

    let mut sorted: Vec<Edge> = graph.edges().to_vec();
    // Stable sort: tied weights keep insertion order, matching Borůvka's
    // earlier-edge-wins convention.
    sorted.sort_by_key(Edge::weight);

    let mut components = UnionFind::new(vertices);
    for edge in sorted {
        if components.unite(edge.u(), edge.v()) {
            mst.push(edge);
            if mst.len() == vertices - 1 {
                break;
            }
        }
    }

    mst
}
