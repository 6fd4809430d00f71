//! Property tests over arbitrary valid rankings.
//!
//! Every permutation of 1..=18 is a valid submission, so these check the
//! structural invariants of a world score:
//! - scoring never fails under the default policy
//! - diffs follow the half-of-scale sign rule
//! - dimension bundles add up to the composite indices
//! - the quick-test mapper always yields a valid ranking

use hartman_axiology::{World, CANONICAL_RANKING, MIDPOINT};
use hartman_engine::{map_alternate_responses, relate_worlds, score_world, Engine, ResponseFormat};
use proptest::prelude::*;

fn ranking() -> impl Strategy<Value = Vec<i32>> {
    Just((1..=18).collect::<Vec<i32>>()).prop_shuffle()
}

fn world() -> impl Strategy<Value = World> {
    prop_oneof![Just(World::External), Just(World::Internal), Just(World::Sexual)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn diffs_follow_the_sign_rule(values in ranking(), world in world()) {
        let score = score_world(world, &values).expect("any permutation scores");
        for (i, diff) in score.diffs().iter().enumerate() {
            let canonical = i32::from(CANONICAL_RANKING[i]);
            let expected = if CANONICAL_RANKING[i] <= MIDPOINT {
                canonical - values[i]
            } else {
                values[i] - canonical
            };
            prop_assert_eq!(*diff, expected);
        }
    }

    #[test]
    fn indices_are_consistent_with_dimensions(values in ranking()) {
        let score = score_world(World::External, &values).expect("score");
        let idx = score.indices;
        let scores: Vec<i32> = score.dimensions.iter().map(|(_, d)| d.dimension_score.value).collect();

        prop_assert_eq!(idx.total_deviation.value, scores.iter().sum::<i32>());
        prop_assert_eq!(idx.total_deviation.value, idx.positives_total + idx.negatives_total);
        prop_assert!(idx.imbalance >= 0);
        prop_assert_eq!(idx.imbalance == 0, scores.iter().all(|s| *s == scores[0]));
        prop_assert!(idx.dimensional_imbalance.value >= 0);
        prop_assert_eq!(idx.q1, idx.q2 + idx.total_deviation.value);
        prop_assert_eq!(
            idx.distortion_count.value as usize,
            score.cells.responses.iter().filter(|r| r.remarked).count()
        );
    }

    #[test]
    fn rankings_keep_every_item_once(values in ranking()) {
        let score = score_world(World::Internal, &values).expect("score");

        let mut positions: Vec<u8> = score.weighted.iter().map(|i| i.axiogram.position()).collect();
        prop_assert!(score.weighted.windows(2).all(|w| w[0].weight_percent >= w[1].weight_percent));
        positions.sort_unstable();
        prop_assert_eq!(positions, (1..=18).collect::<Vec<u8>>());

        for (dim, items) in score.weighted_by_dimension.iter() {
            prop_assert_eq!(items.len(), 6);
            prop_assert!(items.iter().all(|i| i.axiogram.dimension() == dim));
        }
        for (_, items) in score.noticeable_by_dimension.iter() {
            prop_assert!(items.windows(2).all(|w| w[0].diff.abs() >= w[1].diff.abs()));
        }
    }

    #[test]
    fn relation_inverts_when_swapped(a in ranking(), b in ranking()) {
        let x = score_world(World::External, &a).expect("score a");
        let y = score_world(World::Internal, &b).expect("score b");
        let forward = relate_worlds(&x, &y).expect("forward");
        let backward = relate_worlds(&y, &x).expect("backward");

        if x.indices.q1 != y.indices.q1 && x.indices.q1 > 0 && y.indices.q1 > 0 {
            prop_assert_ne!(forward.ratio1.value, backward.ratio1.value);
        }
    }

    #[test]
    fn mapper_output_is_a_valid_ranking(values in ranking()) {
        let mapped = map_alternate_responses(&values).expect("permutation maps");
        let mut ranks = mapped.as_array().to_vec();
        ranks.sort_unstable();
        prop_assert_eq!(ranks, (1..=18).collect::<Vec<u8>>());
    }

    #[test]
    fn quick_test_battery_matches_mapped_scores(a in ranking(), b in ranking()) {
        let flat: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        let battery = Engine::default()
            .score_battery(&flat, ResponseFormat::QuickTest)
            .expect("battery");
        let external = map_alternate_responses(&a).expect("map");
        prop_assert_eq!(battery.external.responses, external);
    }
}
