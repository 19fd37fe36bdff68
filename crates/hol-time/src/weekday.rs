//! Weekday ordinals and weekend masks.
//!
//! Ordinals are Monday-first, 0–6, matching
//! [`chrono::Weekday::num_days_from_monday`].

use chrono::{Datelike, NaiveDate, Weekday};
use hol_core::errors::{Error, Result};

/// Monday (0).
pub const MON: u8 = 0;
/// Tuesday (1).
pub const TUE: u8 = 1;
/// Wednesday (2).
pub const WED: u8 = 2;
/// Thursday (3).
pub const THU: u8 = 3;
/// Friday (4).
pub const FRI: u8 = 4;
/// Saturday (5).
pub const SAT: u8 = 5;
/// Sunday (6).
pub const SUN: u8 = 6;

/// Monday-first ordinal (0–6) of `weekday`.
pub fn ordinal(weekday: Weekday) -> u8 {
    weekday.num_days_from_monday() as u8
}

/// Weekday for a Monday-first ordinal, or `None` if `n > 6`.
pub fn from_ordinal(n: u8) -> Option<Weekday> {
    match n {
        MON => Some(Weekday::Mon),
        TUE => Some(Weekday::Tue),
        WED => Some(Weekday::Wed),
        THU => Some(Weekday::Thu),
        FRI => Some(Weekday::Fri),
        SAT => Some(Weekday::Sat),
        SUN => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse a weekday name (`"sat"`, `"Saturday"`, case-insensitive).
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| Error::Date(format!("unknown weekday '{s}'")))
}

/// A set of weekdays, stored as a 7-bit mask.
///
/// Used to describe which days a jurisdiction treats as its weekend.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// No weekdays.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Saturday and Sunday, the default weekend.
    pub const SAT_SUN: WeekdaySet = WeekdaySet((1 << SAT) | (1 << SUN));

    /// Friday and Saturday.
    pub const FRI_SAT: WeekdaySet = WeekdaySet((1 << FRI) | (1 << SAT));

    /// Sunday only.
    pub const SUN_ONLY: WeekdaySet = WeekdaySet(1 << SUN);

    /// Return `true` if `weekday` is in the set.
    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & (1 << ordinal(weekday)) != 0
    }

    /// Add `weekday` to the set.
    pub fn insert(&mut self, weekday: Weekday) {
        self.0 |= 1 << ordinal(weekday);
    }

    /// Return `true` if `date` falls on a day in the set.
    pub fn is_weekend(self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    /// Number of weekdays in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the members, Monday first.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        (MON..=SUN)
            .filter(move |&n| self.0 & (1 << n) != 0)
            .filter_map(from_ordinal)
    }
}

impl Default for WeekdaySet {
    fn default() -> Self {
        Self::SAT_SUN
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::EMPTY;
        for weekday in iter {
            set.insert(weekday);
        }
        set
    }
}

impl std::fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
