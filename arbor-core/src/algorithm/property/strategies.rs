//! Strategy builders for the algorithm property tests.
//!
//! Generates graphs with varied topologies and weight distributions. Sizes
//! stay modest because Reverse-Delete is quadratic in the edge count and runs
//! against every fixture.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

use super::types::{GraphFixture, WeightDistribution};

/// Minimum node count for connected fixtures.
const MIN_NODES: usize = 6;
/// Maximum node count for most fixtures.
const MAX_NODES: usize = 24;
/// Maximum node count for dense fixtures.
const DENSE_MAX_NODES: usize = 12;

/// Generates fixtures covering all five weight distributions, biased towards
/// the tie-heavy case that stresses deterministic edge selection.
pub(super) fn fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

fn distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Dense),
        2 => Just(WeightDistribution::Disconnected),
    ]
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> GraphFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique(rng),
        WeightDistribution::ManyIdentical => generate_identical(rng),
        WeightDistribution::Sparse => generate_connected(rng, MAX_NODES, (0.05, 0.2), distribution),
        WeightDistribution::Dense => {
            generate_connected(rng, DENSE_MAX_NODES, (0.7, 0.95), distribution)
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn generate_unique(rng: &mut SmallRng) -> GraphFixture {
    let vertices = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pairs = component_pairs(vertices, 0, 0.3, rng);

    // Shuffled distinct weights: the MST is unique up to edge order.
    let mut weights: Vec<i64> = (1..=pairs.len() as i64).collect();
    shuffle_weights(&mut weights, rng);

    GraphFixture {
        graph: assemble(vertices, &pairs, &weights),
        component_count: 1,
        distribution: WeightDistribution::Unique,
    }
}

fn generate_identical(rng: &mut SmallRng) -> GraphFixture {
    let vertices = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pairs = component_pairs(vertices, 0, rng.gen_range(0.3..=0.7), rng);

    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(1..=5)).collect();
    let weights: Vec<i64> = (0..pairs.len())
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();

    GraphFixture {
        graph: assemble(vertices, &pairs, &weights),
        component_count: 1,
        distribution: WeightDistribution::ManyIdentical,
    }
}

fn generate_connected(
    rng: &mut SmallRng,
    max_nodes: usize,
    probability_range: (f64, f64),
    distribution: WeightDistribution,
) -> GraphFixture {
    let vertices = rng.gen_range(MIN_NODES..=max_nodes);
    let probability = rng.gen_range(probability_range.0..=probability_range.1);
    let pairs = component_pairs(vertices, 0, probability, rng);
    let weights: Vec<i64> = (0..pairs.len()).map(|_| rng.gen_range(1..=100)).collect();

    GraphFixture {
        graph: assemble(vertices, &pairs, &weights),
        component_count: 1,
        distribution,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> GraphFixture {
    let component_sizes: Vec<usize> = (0..rng.gen_range(2..=4))
        .map(|_| rng.gen_range(2..=8))
        .collect();
    let vertices: usize = component_sizes.iter().sum();

    let mut pairs = Vec::new();
    let mut offset = 0;
    for &size in &component_sizes {
        pairs.extend(component_pairs(size, offset, rng.gen_range(0.3..=0.8), rng));
        offset += size;
    }
    let weights: Vec<i64> = (0..pairs.len()).map(|_| rng.gen_range(1..=100)).collect();

    GraphFixture {
        graph: assemble(vertices, &pairs, &weights),
        component_count: component_sizes.len(),
        distribution: WeightDistribution::Disconnected,
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Builds a graph from parallel pair and weight slices.
fn assemble(vertices: usize, pairs: &[(usize, usize)], weights: &[i64]) -> Graph {
    let mut graph = Graph::new(vertices);
    for (&(u, v), &weight) in pairs.iter().zip(weights) {
        graph
            .add_edge(u, v, weight)
            .expect("generated pairs are unique, in range, and positively weighted");
    }
    graph
}

/// Returns the pair set of a connected component: a random spanning tree over
/// `offset..offset + size` plus each remaining pair with the given
/// probability. Every pair appears at most once.
fn component_pairs(
    size: usize,
    offset: usize,
    probability: f64,
    rng: &mut SmallRng,
) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (offset..offset + size).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    let mut pairs: Vec<(usize, usize)> = order.windows(2).map(|w| (w[0], w[1])).collect();
    let tree: HashSet<(usize, usize)> = pairs.iter().map(|&(u, v)| canonical(u, v)).collect();

    for i in offset..offset + size {
        for j in (i + 1)..offset + size {
            if !tree.contains(&(i, j)) && rng.gen_bool(probability) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Returns the pair in canonical order `(min, max)`.
fn canonical(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Fisher-Yates shuffle for the weight vector.
fn shuffle_weights(weights: &mut [i64], rng: &mut SmallRng) {
    for i in (1..weights.len()).rev() {
        let j = rng.gen_range(0..=i);
        weights.swap(i, j);
    }
}
