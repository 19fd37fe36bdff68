//! # hol-time
//!
//! Thin helpers on top of [`chrono::NaiveDate`]: day shifting, month/day
//! arguments resolved against a working year, Monday-first weekday ordinals
//! and weekend masks.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Date construction, parsing and shifting; `DateArg`.
pub mod date;

/// Weekday ordinals and the `WeekdaySet` weekend mask.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use chrono::{Datelike, NaiveDate, Weekday};
pub use date::{parse_date, shift_days, ymd, DateArg, EstimatedDate};
pub use weekday::WeekdaySet;
