use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nextup_core::config::RankingConfig;
use nextup_core::models::{Item, Transition};
use nextup_core::traits::SeededRandom;
use nextup_ranking::RankingPipeline;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 12, 0, 0, 0).unwrap()
}

/// Pool of `n` items spread over a few families, creators and methods.
fn build_pool(n: i64) -> Vec<Item> {
    (2..n + 2)
        .map(|id| {
            let method = if id % 3 == 0 { "m1" } else { "m2" };
            Item::new(
                id,
                format!("creator-{}", id % 7),
                "p1",
                method,
                now() - Duration::hours(id),
            )
            .with_family(format!("F{}", id % 11))
        })
        .collect()
}

/// Transitions from the anchor to every fourth pool item.
fn build_transitions(n: i64) -> Vec<Transition> {
    (2..n + 2)
        .step_by(4)
        .map(|id| Transition::new(1, id, id % 13, now() - Duration::days(id % 20)))
        .collect()
}

fn bench_pipeline_1k_pool(c: &mut Criterion) {
    let anchor = Item::new(1, "creator-1", "p1", "m1", now()).with_family("F1");
    let pool = build_pool(1_000);
    let transitions = build_transitions(1_000);
    let pipeline = RankingPipeline::new(RankingConfig::default());

    c.bench_function("pipeline_1k_pool", |b| {
        let mut rng = SeededRandom::new(7);
        b.iter(|| {
            black_box(pipeline.run(&anchor, &pool, &transitions, now(), &mut rng));
        });
    });
}

fn bench_pipeline_window_decay(c: &mut Criterion) {
    let anchor = Item::new(1, "creator-1", "p1", "m1", now()).with_family("F1");
    let pool = build_pool(1_000);
    let transitions = build_transitions(1_000);
    let pipeline = RankingPipeline::new(RankingConfig {
        decay_half_life_days: 0.0,
        window_days: 14.0,
        ..RankingConfig::default()
    });

    c.bench_function("pipeline_1k_pool_window", |b| {
        let mut rng = SeededRandom::new(7);
        b.iter(|| {
            black_box(pipeline.run(&anchor, &pool, &transitions, now(), &mut rng));
        });
    });
}

criterion_group!(benches, bench_pipeline_1k_pool, bench_pipeline_window_decay);
criterion_main!(benches);
