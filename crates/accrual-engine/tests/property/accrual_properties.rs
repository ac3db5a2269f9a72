use accrual_core::models::CounterState;
use accrual_core::FixedParams;
use accrual_engine::{add, get, settle};
use proptest::prelude::*;
use test_fixtures::{MemoryCounter, Slot, SlotCounter};

fn counter(max: i64, min: i64, interval: i64, rate: f64) -> SlotCounter {
    SlotCounter::new(FixedParams::new(max, min, interval, rate).unwrap())
}

// ── No credit without a whole elapsed interval ──────────────────────────

proptest! {
    #[test]
    fn no_credit_when_clock_does_not_advance(
        count in 0i64..200,
        ts in -1_000_000i64..1_000_000,
        back in 0i64..1_000_000,
        rate in -5.0f64..5.0,
    ) {
        let c = counter(100, 0, 1_000, rate);
        let slot = Slot::new(count, ts);
        let snap = get(&c, ts - back, &slot).unwrap();
        prop_assert_eq!(snap.count, count);
        prop_assert_eq!(snap.timestamp, ts);
        prop_assert_eq!(snap.auto_added, 0);
    }

    #[test]
    fn disabled_interval_never_accrues(
        count in -50i64..200,
        interval in -10_000i64..=0,
        later in 0i64..10_000_000,
    ) {
        let c = counter(100, -100, interval, 3.0);
        let slot = Slot::new(count, 0);
        let snap = get(&c, later, &slot).unwrap();
        prop_assert_eq!(snap.count, count);
        prop_assert_eq!(snap.timestamp, 0);
    }
}

// ── Ceiling behaviour ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn capped_counter_never_exceeds_max(
        steps in proptest::collection::vec(1i64..100_000, 1..20),
        rate in 0.0f64..50.0,
    ) {
        let c = counter(100, 0, 1_000, rate);
        let slot = Slot::new(100, 0);
        let mut now = 0;
        for step in steps {
            now += step;
            let snap = get(&c, now, &slot).unwrap();
            prop_assert!(snap.count <= 100);
        }
    }

    #[test]
    fn overshoot_is_preserved(
        overshoot in 101i64..10_000,
        elapsed in 0i64..10_000_000,
        rate in 0.0f64..10.0,
    ) {
        let c = counter(100, 0, 1_000, rate);
        let slot = Slot::new(overshoot, 0);
        let snap = get(&c, elapsed, &slot).unwrap();
        prop_assert_eq!(snap.count, overshoot);
    }

    #[test]
    fn settled_timestamp_is_whole_intervals_unless_capped(
        count in 0i64..100,
        elapsed in 0i64..1_000_000,
        interval in 1i64..10_000,
        rate in 0.0f64..2.0,
    ) {
        let mut c = counter(100, 0, interval, rate);
        let mut slot = Slot::new(count, 0);
        let snap = settle(&mut c, elapsed, &mut slot).unwrap();
        if snap.count >= 100 {
            prop_assert_eq!(snap.timestamp, elapsed);
        } else {
            prop_assert_eq!(snap.timestamp % interval, 0);
            prop_assert!(elapsed - snap.timestamp < interval);
        }
        prop_assert!(snap.count >= 0);
    }
}

// ── Rejection and dry runs ──────────────────────────────────────────────

proptest! {
    #[test]
    fn rejection_is_atomic(
        count in 0i64..100,
        ts in 0i64..1_000_000,
        elapsed in 0i64..1_000_000,
        extra in 1i64..1_000,
    ) {
        let mut c = counter(100, 0, 1_000, 0.5);
        let mut slot = Slot::new(count, ts);
        let before = slot.state;
        let projected = get(&c, ts + elapsed, &slot).unwrap().count;
        let adj = add(&mut c, -(projected + extra), ts + elapsed, false, &mut slot).unwrap();
        prop_assert!(!adj.accepted);
        prop_assert_eq!(adj.count, projected);
        prop_assert_eq!(slot.state, before);
        prop_assert_eq!(slot.writes, 0);
    }

    #[test]
    fn dry_run_is_pure(
        count in 0i64..150,
        elapsed in 0i64..1_000_000,
        amount in -200i64..200,
    ) {
        let mut c = counter(100, 0, 1_000, 0.5);
        let mut slot = Slot::new(count, 0);
        let before = get(&c, elapsed, &slot).unwrap();
        let _ = add(&mut c, amount, elapsed, true, &mut slot).unwrap();
        let after = get(&c, elapsed, &slot).unwrap();
        prop_assert_eq!(before, after);
        prop_assert_eq!(slot.state, CounterState::new(count, 0));
        prop_assert_eq!(slot.writes, 0);
    }

    #[test]
    fn accepted_adjustment_stays_at_or_above_min(
        count in -10i64..150,
        elapsed in 0i64..100_000,
        amount in -200i64..200,
    ) {
        let mut c = counter(100, -10, 1_000, -1.0);
        let mut slot = Slot::new(count, 0);
        let adj = add(&mut c, amount, elapsed, false, &mut slot).unwrap();
        if adj.accepted {
            prop_assert!(slot.state.count >= -10);
            prop_assert_eq!(slot.state.count, adj.count);
        }
    }
}

// ── Narrow kinds over long idle periods ─────────────────────────────────

proptest! {
    #[test]
    fn narrow_kinds_stay_within_bounds_after_long_idle(
        min in -1_000i32..0,
        max in 0i32..1_000,
        base_offset in 0i32..3_000,
        rate in any::<i32>(),
        interval in 1i64..1_000,
        elapsed in 0i64..i64::MAX / 2,
    ) {
        let base = min + base_offset;
        let params = FixedParams::<i32, i32>::new(max, min, interval, rate).unwrap();
        let mut c = MemoryCounter::new(params);
        c.insert("idle", CounterState::new(base, 0));
        let snap = get(&c, elapsed, &"idle".to_string());
        prop_assert!(snap.is_ok(), "{:?}", snap);
        let count = snap.unwrap().count;
        prop_assert!(count >= min);
        prop_assert!(count <= max.max(base));
    }
}
