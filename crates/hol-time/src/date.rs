//! Date helpers built on [`chrono::NaiveDate`].

use chrono::{Datelike, Days, NaiveDate};
use hol_core::errors::{Error, Result};
use hol_core::{DayDelta, Year};

// ── Month constants ───────────────────────────────────────────────────────────

/// January.
pub const JAN: u32 = 1;
/// February.
pub const FEB: u32 = 2;
/// March.
pub const MAR: u32 = 3;
/// April.
pub const APR: u32 = 4;
/// May.
pub const MAY: u32 = 5;
/// June.
pub const JUN: u32 = 6;
/// July.
pub const JUL: u32 = 7;
/// August.
pub const AUG: u32 = 8;
/// September.
pub const SEP: u32 = 9;
/// October.
pub const OCT: u32 = 10;
/// November.
pub const NOV: u32 = 11;
/// December.
pub const DEC: u32 = 12;

/// Build a date from year, month (1–12) and day-of-month.
pub fn ymd(year: Year, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Date(format!("{year}-{month:02}-{day:02} is not a valid date")))
}

/// Shift `date` by `delta` calendar days.
///
/// Returns `None` only when the result falls outside chrono's supported range.
pub fn shift_days(date: NaiveDate, delta: DayDelta) -> Option<NaiveDate> {
    let days = Days::new(u64::from(delta.unsigned_abs()));
    if delta >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

/// Parse a date from one of the accepted textual forms:
/// `2024-01-31`, `20240131` or `01/31/2024`.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    ["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| Error::Date(format!("cannot parse date from string '{s}'")))
}

/// A date argument: either a complete date or a month/day pair that is
/// resolved against the year currently being populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateArg {
    /// A complete calendar date.
    Date(NaiveDate),
    /// Month (1–12) and day-of-month within the working year.
    MonthDay(u32, u32),
}

impl DateArg {
    /// Resolve to a concrete date. A full date is returned unchanged even if
    /// its year differs from `year`.
    pub fn resolve(self, year: Year) -> Result<NaiveDate> {
        match self {
            DateArg::Date(date) => Ok(date),
            DateArg::MonthDay(month, day) => ymd(year, month, day),
        }
    }
}

impl From<NaiveDate> for DateArg {
    fn from(date: NaiveDate) -> Self {
        DateArg::Date(date)
    }
}

impl From<(u32, u32)> for DateArg {
    fn from((month, day): (u32, u32)) -> Self {
        DateArg::MonthDay(month, day)
    }
}

/// A date supplied by a calendar provider, flagged when it is an estimate
/// rather than an officially confirmed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EstimatedDate {
    /// The (possibly estimated) date.
    pub date: NaiveDate,
    /// `true` if `date` is an estimate.
    pub is_estimate: bool,
}

impl EstimatedDate {
    /// A confirmed date.
    pub fn exact(date: NaiveDate) -> Self {
        Self {
            date,
            is_estimate: false,
        }
    }

    /// An estimated date.
    pub fn estimated(date: NaiveDate) -> Self {
        Self {
            date,
            is_estimate: true,
        }
    }
}

/// Return `true` if both dates fall in the same calendar year.
pub fn same_year(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_forward_and_back() {
        let d = ymd(2023, 12, 31).unwrap();
        assert_eq!(shift_days(d, 1), Some(ymd(2024, 1, 1).unwrap()));
        assert_eq!(shift_days(d, -31), Some(ymd(2023, 11, 30).unwrap()));
        assert_eq!(shift_days(d, 0), Some(d));
    }

    #[test]
    fn month_day_resolves_against_year() {
        let arg = DateArg::from((FEB, 29));
        assert_eq!(arg.resolve(2024).unwrap(), ymd(2024, 2, 29).unwrap());
        assert!(matches!(arg.resolve(2023), Err(Error::Date(_))));
    }

    #[test]
    fn full_date_ignores_year() {
        let d = ymd(2006, 12, 31).unwrap();
        assert_eq!(DateArg::from(d).resolve(2007).unwrap(), d);
    }

    #[test]
    fn invalid_ymd() {
        assert!(ymd(2023, 13, 1).is_err());
        assert!(ymd(2023, 4, 31).is_err());
    }
}
