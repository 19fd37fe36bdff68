//! Observed date resolution.
//!
//! Resolution never fails: a weekday without an entry, or a scan that would
//! leave the year, resolves to the nominal date itself, which callers read as
//! "nothing to observe".

use chrono::NaiveDate;
use hol_core::DayDelta;
use hol_time::date::same_year;
use hol_time::shift_days;
use tracing::trace;

use crate::context::ResolutionContext;
use crate::rule::{ObservedRule, Shift};
use crate::store::HolidayStore;

/// Scan direction for workday searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Later dates.
    Forward,
    /// Earlier dates.
    Backward,
}

impl Direction {
    /// One-day step in this direction.
    pub fn step(self) -> DayDelta {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Compute the observed date of `nominal` under `rule`.
///
/// * no entry for the weekday → `nominal`;
/// * fixed offset → `nominal` shifted by that many days, unchecked;
/// * scan sentinel → the first day after (or before) `nominal` that is
///   neither a weekend day nor present in `store`, provided it lies in
///   `nominal`'s year; otherwise `nominal`.
pub fn resolve(
    nominal: NaiveDate,
    rule: &ObservedRule,
    store: &HolidayStore,
    ctx: &ResolutionContext,
) -> NaiveDate {
    match rule.shift_for(nominal) {
        None => nominal,
        Some(Shift::Days(delta)) => shift_days(nominal, delta).unwrap_or(nominal),
        Some(Shift::NextWorkday) => {
            next_workday(nominal, Direction::Forward, store, ctx).unwrap_or(nominal)
        }
        Some(Shift::PreviousWorkday) => {
            next_workday(nominal, Direction::Backward, store, ctx).unwrap_or(nominal)
        }
    }
}

/// Walk from `from` one day at a time in `direction` and return the first
/// date that is neither a weekend day nor already a holiday.
///
/// Returns `None` if the walk reaches another calendar year first.
pub fn next_workday(
    from: NaiveDate,
    direction: Direction,
    store: &HolidayStore,
    ctx: &ResolutionContext,
) -> Option<NaiveDate> {
    let mut candidate = shift_days(from, direction.step())?;
    while same_year(candidate, from) {
        if !ctx.is_weekend(candidate) && !store.contains(candidate) {
            return Some(candidate);
        }
        trace!(%candidate, "skipping non-working day");
        candidate = shift_days(candidate, direction.step())?;
    }
    trace!(%from, ?direction, "workday scan left the year");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{SAT_SUN_TO_NEXT_MON, SAT_SUN_TO_NEXT_WORKDAY, WORKDAY_TO_NEXT_WORKDAY};
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_entry_is_identity() {
        let ctx = ResolutionContext::new(2024);
        let store = HolidayStore::new();
        // 2024-07-04 is a Thursday
        let d = date(2024, 7, 4);
        assert_eq!(resolve(d, &SAT_SUN_TO_NEXT_MON, &store, &ctx), d);
    }

    #[test]
    fn fixed_offset() {
        let ctx = ResolutionContext::new(2021);
        let store = HolidayStore::new();
        // 2021-07-04 is a Sunday
        assert_eq!(
            resolve(date(2021, 7, 4), &SAT_SUN_TO_NEXT_MON, &store, &ctx),
            date(2021, 7, 5)
        );
    }

    #[test]
    fn scan_skips_weekend_and_holidays() {
        let ctx = ResolutionContext::new(2022);
        let mut store = HolidayStore::new();
        // 2022-12-25 Sunday, 2022-12-26 Monday already taken
        store.insert(date(2022, 12, 25), "Christmas Day").unwrap();
        store.insert(date(2022, 12, 26), "Boxing Day").unwrap();
        assert_eq!(
            resolve(date(2022, 12, 25), &SAT_SUN_TO_NEXT_WORKDAY, &store, &ctx),
            date(2022, 12, 27)
        );
    }

    #[test]
    fn scan_respects_custom_weekend() {
        let ctx = ResolutionContext::new(2024).with_weekend(hol_time::WeekdaySet::FRI_SAT);
        let store = HolidayStore::new();
        let rule = ObservedRule::new([(Weekday::Fri, 7)]).unwrap();
        // 2024-03-01 Friday → Saturday is weekend too → Sunday
        assert_eq!(resolve(date(2024, 3, 1), &rule, &store, &ctx), date(2024, 3, 3));
    }

    #[test]
    fn scan_stops_at_year_end() {
        let ctx = ResolutionContext::new(2022);
        let store = HolidayStore::new();
        // 2022-12-31 Saturday: the next workday is in 2023
        assert_eq!(
            next_workday(date(2022, 12, 31), Direction::Forward, &store, &ctx),
            None
        );
        assert_eq!(
            resolve(date(2022, 12, 31), &SAT_SUN_TO_NEXT_WORKDAY, &store, &ctx),
            date(2022, 12, 31)
        );
    }

    #[test]
    fn scan_may_land_on_a_shifted_weekday() {
        // Only weekend days and occupied dates are skipped; Tuesday carries
        // its own scan entry in this table but is still a valid target.
        let ctx = ResolutionContext::new(2024);
        let mut store = HolidayStore::new();
        // 2024-05-27 is a Monday
        store.insert(date(2024, 5, 27), "Memorial Day").unwrap();
        assert_eq!(
            resolve(date(2024, 5, 27), &WORKDAY_TO_NEXT_WORKDAY, &store, &ctx),
            date(2024, 5, 28)
        );
        assert!(WORKDAY_TO_NEXT_WORKDAY.get(Weekday::Tue).is_some());
    }
}
