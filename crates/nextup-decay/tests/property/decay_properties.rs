//! Property tests for decay bounds and monotonicity.

use proptest::prelude::*;

use nextup_decay::{decay, DecayPolicy};

proptest! {
    #[test]
    fn decay_bounded(age in 0.0f64..10_000.0, half_life in 0.0f64..1_000.0) {
        let d = decay(age, half_life);
        prop_assert!((0.0..=1.0).contains(&d), "decay {} out of bounds", d);
    }

    #[test]
    fn decay_monotonic_in_age(
        a in 0.0f64..1_000.0,
        delta in 0.0f64..1_000.0,
        half_life in 0.01f64..100.0,
    ) {
        prop_assert!(decay(a + delta, half_life) <= decay(a, half_life));
    }

    #[test]
    fn effective_count_never_exceeds_raw(
        count in -100i64..10_000,
        age in 0.0f64..1_000.0,
        days in 0.01f64..100.0,
    ) {
        for policy in [DecayPolicy::HalfLife(days), DecayPolicy::Window(days), DecayPolicy::Identity] {
            let effective = policy.effective_count(count, age);
            prop_assert!(effective >= 0.0);
            prop_assert!(effective <= count.max(0) as f64);
        }
    }
}
