//! Weight equivalence across the algorithm family.
//!
//! The minimum spanning forest weight is unique even when the edge set
//! achieving it is not, so on any fixture Borůvka and Reverse-Delete must
//! agree with Kruskal exactly. Prim joins the comparison on connected input
//! only (it never leaves vertex 0's component), and Second-Best must produce
//! a spanning tree no lighter than the MST.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::algorithm::{Algorithm, total_weight};

use super::types::GraphFixture;

/// Runs the weight equivalence property for the given fixture.
pub(super) fn run_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let kruskal_weight = total_weight(&Algorithm::Kruskal.find_mst(&fixture.graph));

    for algorithm in [Algorithm::Boruvka, Algorithm::ReverseDelete] {
        let weight = total_weight(&algorithm.find_mst(&fixture.graph));
        if weight != kruskal_weight {
            return Err(mismatch(fixture, algorithm, weight, kruskal_weight));
        }
    }

    if fixture.component_count == 1 {
        let prim_weight = total_weight(&Algorithm::Prim.find_mst(&fixture.graph));
        if prim_weight != kruskal_weight {
            return Err(mismatch(fixture, Algorithm::Prim, prim_weight, kruskal_weight));
        }

        let second_best_weight = total_weight(&Algorithm::SecondBest.find_mst(&fixture.graph));
        if second_best_weight < kruskal_weight {
            return Err(TestCaseError::fail(format!(
                "Second-Best weight {second_best_weight} is lighter than the MST \
                 weight {kruskal_weight} (distribution={:?})",
                fixture.distribution,
            )));
        }
    }

    // Determinism: a fixed edge order must reproduce the identical tree.
    let first = Algorithm::Boruvka.find_mst(&fixture.graph);
    let second = Algorithm::Boruvka.find_mst(&fixture.graph);
    if first != second {
        return Err(TestCaseError::fail(format!(
            "Borůvka is not deterministic (distribution={:?})",
            fixture.distribution,
        )));
    }

    Ok(())
}

fn mismatch(
    fixture: &GraphFixture,
    algorithm: Algorithm,
    weight: i64,
    expected: i64,
) -> TestCaseError {
    TestCaseError::fail(format!(
        "{} weight {weight} != Kruskal weight {expected} (vertices={}, edges={}, \
         distribution={:?})",
        algorithm.name(),
        fixture.graph.vertex_count(),
        fixture.graph.edge_count(),
        fixture.distribution,
    ))
}
