//! Property tests for the ranking pipeline output contract.

use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use nextup_core::config::RankingConfig;
use nextup_core::models::{Item, ItemId, Recommendation, Transition};
use nextup_core::traits::SeededRandom;
use nextup_ranking::RankingPipeline;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 12, 0, 0, 0).unwrap()
}

fn anchor() -> Item {
    Item::new(1, "A", "p1", "m1", t0()).with_family("F1")
}

fn arb_item() -> impl Strategy<Value = Item> {
    (
        1i64..30,
        prop_oneof![Just(None), Just(Some("F1")), Just(Some("F2")), Just(Some(""))],
        prop::option::of(1i64..30),
        prop_oneof![Just("A"), Just("B"), Just("C")],
        prop_oneof![Just(("p1", "m1")), Just(("p1", "m2")), Just(("p2", "m1"))],
        -20i64..20,
        prop_oneof![Just(None), Just(Some(true)), Just(Some(false))],
    )
        .prop_map(|(id, family, parent, creator, (provider, method), days, active)| {
            let mut item = Item::new(id, creator, provider, method, t0() + Duration::days(days));
            item.family_id = family.map(str::to_string);
            item.parent_id = parent.map(ItemId);
            item.active = active;
            item
        })
}

fn arb_transition() -> impl Strategy<Value = Transition> {
    (prop_oneof![Just(1i64), Just(2i64)], 1i64..30, -2i64..20, 0i64..60).prop_map(
        |(from, to, count, age)| Transition::new(from, to, count, t0() - Duration::days(age)),
    )
}

fn arb_config() -> impl Strategy<Value = RankingConfig> {
    (
        1usize..15,
        0usize..5,
        0.0f64..=1.0,
        0usize..4,
        any::<bool>(),
        prop_oneof![Just((7.0, 0.0)), Just((0.0, 14.0)), Just((0.0, 0.0)), Just((3.0, 30.0))],
    )
        .prop_map(
            |(batch_size, random_slots, random_fraction, lineage_min_slots, fallback, (half_life, window))| {
                RankingConfig {
                    batch_size,
                    random_slots_per_batch: random_slots,
                    random_fraction,
                    lineage_min_slots,
                    fallback_enabled: fallback,
                    decay_half_life_days: half_life,
                    window_days: window,
                    ..RankingConfig::default()
                }
            },
        )
}

fn rank(
    config: &RankingConfig,
    pool: &[Item],
    transitions: &[Transition],
    seed: u64,
) -> Vec<Recommendation> {
    let pipeline = RankingPipeline::new(config.clone());
    let mut rng = SeededRandom::new(seed);
    pipeline
        .run(&anchor(), pool, transitions, t0(), &mut rng)
        .recommendations
}

// ---------------------------------------------------------------------------
// Output contract
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn output_contract_holds(
        pool in prop::collection::vec(arb_item(), 0..40),
        transitions in prop::collection::vec(arb_transition(), 0..40),
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let out = rank(&config, &pool, &transitions, seed);

        // No self-recommendation.
        prop_assert!(out.iter().all(|r| r.id != ItemId(1)));

        // Uniqueness.
        let ids: HashSet<ItemId> = out.iter().map(|r| r.id).collect();
        prop_assert_eq!(ids.len(), out.len());

        // Sorted descending.
        for pair in out.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score, "not sorted: {:?}", out);
        }

        // Batch bound.
        let distinct: HashSet<ItemId> = pool
            .iter()
            .map(|i| i.id)
            .filter(|id| *id != ItemId(1))
            .collect();
        prop_assert!(out.len() <= config.batch_size);
        prop_assert!(out.len() <= distinct.len());
    }
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn same_seed_same_output(
        pool in prop::collection::vec(arb_item(), 0..30),
        transitions in prop::collection::vec(arb_transition(), 0..30),
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let first = serde_json::to_string(&rank(&config, &pool, &transitions, seed)).unwrap();
        let second = serde_json::to_string(&rank(&config, &pool, &transitions, seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Lineage quota
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn lineage_fills_a_two_slot_batch(
        pool in prop::collection::vec(arb_item(), 0..30),
        transitions in prop::collection::vec(arb_transition(), 0..30),
        click_next_weight in 0.0f64..5000.0,
        seed in any::<u64>(),
    ) {
        let anchor = anchor();
        let lineage: HashSet<ItemId> = pool
            .iter()
            .filter(|i| i.id != anchor.id && i.is_active() && i.shares_lineage_with(&anchor))
            .map(|i| i.id)
            .collect();
        prop_assume!(lineage.len() >= 2);

        let config = RankingConfig {
            batch_size: 2,
            random_fraction: 0.0,
            lineage_min_slots: 2,
            click_next_weight,
            ..RankingConfig::default()
        };
        let out = rank(&config, &pool, &transitions, seed);
        prop_assert_eq!(out.len(), 2);
        prop_assert!(out.iter().all(|r| lineage.contains(&r.id)), "{:?} vs {:?}", out, lineage);
    }
}

// ---------------------------------------------------------------------------
// Random slots keep the batch score-sorted
// ---------------------------------------------------------------------------

#[test]
fn random_slots_keep_output_sorted_across_seeds() {
    let pool: Vec<Item> = (2..60)
        .map(|id| {
            let creator = if id % 2 == 0 { "A" } else { "B" };
            let mut item = Item::new(id, creator, "p1", "m1", t0() + Duration::hours(id));
            if id % 5 == 0 {
                item.family_id = Some("F1".to_string());
            }
            item
        })
        .collect();
    let transitions: Vec<Transition> = (2..60)
        .step_by(3)
        .map(|id| Transition::new(1, id, id % 11, t0() - Duration::days(id % 9)))
        .collect();
    let config = RankingConfig {
        random_slots_per_batch: 2,
        batch_size: 10,
        ..RankingConfig::default()
    };

    for seed in 0..100 {
        let out = rank(&config, &pool, &transitions, seed);
        assert_eq!(out.len(), 10);
        for pair in out.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "seed {seed}: {} < {}",
                pair[0].score,
                pair[1].score
            );
        }
    }
}
