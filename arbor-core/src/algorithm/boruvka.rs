//! Borůvka's algorithm: iterative min-edge-per-component contraction.
//!
//! Each round scans the whole edge list once, records the cheapest crossing
//! edge for every component, then merges along those edges. Every surviving
//! component gains at least one outgoing edge per round, so the component
//! count at least halves and the loop runs O(log V) rounds over O(E) scans.

use crate::graph::{Edge, Graph};
use crate::union_find::UnionFind;

pub(super) fn find_mst(graph: &Graph) -> Vec<Edge> {
    let vertices = graph.vertex_count();
    let edges = graph.edges();
    let mut mst = Vec::new();

    if vertices <= 1 {
        return mst;
    }

    let mut components = UnionFind::new(vertices);
    // Cheapest crossing edge per component, indexed by the representative's
    // vertex id and holding an edge-list index. Lives for one round only.
    let mut cheapest: Vec<Option<usize>> = vec![None; vertices];

    while components.components() > 1 {
        for slot in &mut cheapest {
            *slot = None;
        }

        for (index, edge) in edges.iter().enumerate() {
            let root_u = components.find(edge.u());
            let root_v = components.find(edge.v());
            if root_u == root_v {
                continue;
            }
            for root in [root_u, root_v] {
                // Strictly cheaper only: ties keep the earlier-seen edge, so
                // a fixed edge order yields a deterministic tree.
                let replace = cheapest[root]
                    .is_none_or(|current| edge.weight() < edges[current].weight());
                if replace {
                    cheapest[root] = Some(index);
                }
            }
        }

        let mut added = false;
        for root in 0..vertices {
            let Some(index) = cheapest[root] else {
                continue;
            };
            let edge = edges[index];
            // An earlier union this round may already have merged the two
            // sides; unite re-checks before merging.
            if components.unite(edge.u(), edge.v()) {
                mst.push(edge);
                added = true;
            }
        }

        if !added {
            // No component found a crossing edge: the remainder is mutually
            // disconnected, so return the partial forest.
            break;
        }
    }

    mst
}
