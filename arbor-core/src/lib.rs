//! Arbor core library: spanning-tree algorithms over undirected weighted graphs.

mod algorithm;
mod graph;
mod tournament;
mod union_find;

pub use crate::{
    algorithm::{
        Algorithm, AlgorithmError, AlgorithmErrorCode, SpanningTree, total_weight,
    },
    graph::{
        Edge, FormatError, FormatErrorCode, GenerateError, Graph, GraphError, GraphErrorCode,
        GraphSpec, generate, load_graph, read_graph, save_graph, write_graph,
    },
    tournament::{Tournament, TournamentEntry, run_tournament},
    union_find::UnionFind,
};
