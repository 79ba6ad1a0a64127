//! Second-best MST: cheapest single-edge swap against the MST.
//!
//! Computes the MST, then for each tree edge rebuilds the cut it closes and
//! finds the cheapest replacement edge crossing that cut. The swap with the
//! smallest resulting total is the second-best spanning tree; its weight is
//! greater than or equal to the MST weight, with equality under ties.

use super::{kruskal, total_weight};
use crate::graph::{Edge, Graph};
use crate::union_find::UnionFind;

pub(super) fn find_mst(graph: &Graph) -> Vec<Edge> {
    let vertices = graph.vertex_count();
    if vertices <= 1 {
        return Vec::new();
    }

    let mst = kruskal::find_mst(graph);
    if mst.len() + 1 < vertices {
        // Disconnected: no spanning tree exists, so no alternative does
        // either. Pass the partial forest through.
        return mst;
    }

    let mst_weight = total_weight(&mst);
    // (total weight, index of the removed tree edge, replacement edge)
    let mut best: Option<(i64, usize, Edge)> = None;

    for (removed_index, removed) in mst.iter().enumerate() {
        // Uniting every remaining tree edge leaves exactly the two sides of
        // the cut that `removed` closed.
        let mut cut = UnionFind::new(vertices);
        for (index, edge) in mst.iter().enumerate() {
            if index != removed_index {
                cut.unite(edge.u(), edge.v());
            }
        }

        for edge in graph.edges() {
            if edge == removed || cut.connected(edge.u(), edge.v()) {
                continue;
            }
            let candidate = mst_weight - removed.weight() + edge.weight();
            let improves = best.is_none_or(|(best_total, _, _)| candidate < best_total);
            if improves {
                best = Some((candidate, removed_index, *edge));
            }
        }
    }

    match best {
        Some((_, removed_index, replacement)) => {
            let mut tree: Vec<Edge> = mst
                .iter()
                .enumerate()
                .filter(|&(index, _)| index != removed_index)
                .map(|(_, edge)| *edge)
                .collect();
            tree.push(replacement);
            tree
        }
        // A tree-shaped graph has no alternative spanning tree; the MST is
        // the only answer available.
        None => mst,
    }
}
