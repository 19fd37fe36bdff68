//! Property checks for the resolver and the batch pass.

use chrono::{Datelike, NaiveDate};
use hol_observed::{
    next_workday, resolve, Direction, HolidayStore, ObservancePolicy, ObservedHolidays,
    ObservedRule, ResolutionContext, Shift,
};
use hol_time::shift_days;
use proptest::prelude::*;

fn arb_year() -> impl Strategy<Value = i32> {
    1990i32..2050
}

fn arb_delta() -> impl Strategy<Value = i32> {
    prop_oneof![Just(-7), -3i32..=-1, 1i32..=3, Just(7)]
}

fn arb_rule() -> impl Strategy<Value = ObservedRule> {
    prop::collection::vec((0u8..7, arb_delta()), 0..7)
        .prop_map(|entries| ObservedRule::from_ordinals(entries).unwrap())
}

fn arb_scan_rule() -> impl Strategy<Value = ObservedRule> {
    prop::collection::vec((0u8..7, prop_oneof![Just(-7), Just(7)]), 1..7)
        .prop_map(|entries| ObservedRule::from_ordinals(entries).unwrap())
}

fn arb_ordinals() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::btree_set(1u32..=365, 0..40).prop_map(|s| s.into_iter().collect())
}

fn build_store(year: i32, ordinals: &[u32]) -> HolidayStore {
    let mut store = HolidayStore::new();
    for &ord in ordinals {
        let d = NaiveDate::from_yo_opt(year, ord).unwrap();
        store.insert(d, format!("Holiday {ord}")).unwrap();
    }
    store
}

proptest! {
    #[test]
    fn unmapped_weekday_is_identity(
        year in arb_year(),
        ord in 1u32..=365,
        rule in arb_rule(),
        ords in arb_ordinals(),
    ) {
        let d = NaiveDate::from_yo_opt(year, ord).unwrap();
        let store = build_store(year, &ords);
        let ctx = ResolutionContext::new(year);
        if rule.shift_for(d).is_none() {
            prop_assert_eq!(resolve(d, &rule, &store, &ctx), d);
        }
    }

    #[test]
    fn fixed_offsets_are_exact(
        year in arb_year(),
        ord in 1u32..=365,
        rule in arb_rule(),
        ords in arb_ordinals(),
    ) {
        let d = NaiveDate::from_yo_opt(year, ord).unwrap();
        let store = build_store(year, &ords);
        let ctx = ResolutionContext::new(year);
        if let Some(Shift::Days(delta)) = rule.shift_for(d) {
            prop_assert_eq!(resolve(d, &rule, &store, &ctx), shift_days(d, delta).unwrap());
        }
    }

    #[test]
    fn scan_lands_on_first_free_workday_of_the_year(
        year in arb_year(),
        ord in 1u32..=365,
        rule in arb_scan_rule(),
        ords in arb_ordinals(),
    ) {
        let d = NaiveDate::from_yo_opt(year, ord).unwrap();
        let store = build_store(year, &ords);
        let ctx = ResolutionContext::new(year);
        let direction = match rule.shift_for(d) {
            Some(Shift::NextWorkday) => Direction::Forward,
            Some(Shift::PreviousWorkday) => Direction::Backward,
            _ => return Ok(()),
        };
        let observed = resolve(d, &rule, &store, &ctx);
        let blocked = |x: NaiveDate| ctx.is_weekend(x) || store.contains(x);

        let mut cursor = shift_days(d, direction.step()).unwrap();
        if observed == d {
            // nothing free before the year boundary
            while cursor.year() == year {
                prop_assert!(blocked(cursor));
                cursor = shift_days(cursor, direction.step()).unwrap();
            }
        } else {
            prop_assert_eq!(observed.year(), year);
            prop_assert!(!blocked(observed));
            while cursor != observed {
                prop_assert!(blocked(cursor));
                cursor = shift_days(cursor, direction.step()).unwrap();
            }
            prop_assert_eq!(next_workday(d, direction, &store, &ctx), Some(observed));
        }
    }

    #[test]
    fn batch_is_order_independent(
        year in arb_year(),
        rule in arb_rule(),
        ords in arb_ordinals(),
        multiple in any::<bool>(),
    ) {
        let policy = ObservancePolicy::new("Prop", rule);
        let store = build_store(year, &ords);
        let dates = store.dates();

        let mut forward = ObservedHolidays::new(&policy, year).with_store(store.clone());
        forward.populate_observed(dates.iter().copied(), multiple).unwrap();

        let mut backward = ObservedHolidays::new(&policy, year).with_store(store.clone());
        backward.populate_observed(dates.iter().rev().copied(), multiple).unwrap();

        prop_assert_eq!(forward.store(), backward.store());
    }

    #[test]
    fn batch_keeps_nominal_entries(
        year in arb_year(),
        rule in arb_rule(),
        ords in arb_ordinals(),
    ) {
        let policy = ObservancePolicy::new("Prop", rule);
        let store = build_store(year, &ords);
        let mut hol = ObservedHolidays::new(&policy, year).with_store(store.clone());
        hol.populate_observed(store.dates(), true).unwrap();
        for (d, names) in store.iter() {
            for name in names {
                prop_assert!(hol.store().names_at(d).contains(name));
            }
        }
        prop_assert!(hol.store().len() >= store.len());
    }
}
