//! Property-based test runners for the algorithm family.
//!
//! Hosts proptest runners for both properties plus rstest parameterised
//! cases pinning each weight distribution to fixed seeds for reproducible
//! coverage.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::equivalence::run_equivalence_property;
use super::strategies::{fixture_strategy, generate_fixture};
use super::structural::run_structural_property;
use super::types::WeightDistribution;

/// Generates an rstest-parameterised function that exercises a property
/// runner across fixed (distribution, seed) pairs.
macro_rules! parameterised_property_test {
    ($test_name:ident, $runner:path, $expectation:expr) => {
        #[rstest::rstest]
        #[case::unique_42(WeightDistribution::Unique, 42)]
        #[case::unique_999(WeightDistribution::Unique, 999)]
        #[case::identical_42(WeightDistribution::ManyIdentical, 42)]
        #[case::identical_999(WeightDistribution::ManyIdentical, 999)]
        #[case::identical_7777(WeightDistribution::ManyIdentical, 7777)]
        #[case::sparse_42(WeightDistribution::Sparse, 42)]
        #[case::sparse_999(WeightDistribution::Sparse, 999)]
        #[case::dense_42(WeightDistribution::Dense, 42)]
        #[case::dense_999(WeightDistribution::Dense, 999)]
        #[case::disconnected_42(WeightDistribution::Disconnected, 42)]
        #[case::disconnected_999(WeightDistribution::Disconnected, 999)]
        fn $test_name(#[case] distribution: WeightDistribution, #[case] seed: u64) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let fixture = generate_fixture(distribution, &mut rng);
            $runner(&fixture).expect($expectation);
        }
    };
}

proptest! {
    // Reverse-Delete is quadratic, so keep the case count moderate.
    #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

    #[test]
    fn structural_invariants(fixture in fixture_strategy()) {
        run_structural_property(&fixture)?;
    }

    #[test]
    fn weight_equivalence(fixture in fixture_strategy()) {
        run_equivalence_property(&fixture)?;
    }
}

parameterised_property_test!(
    structural_invariants_rstest,
    run_structural_property,
    "structural invariants must hold"
);

parameterised_property_test!(
    weight_equivalence_rstest,
    run_equivalence_property,
    "weight equivalence must hold"
);
