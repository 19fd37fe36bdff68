//! # hol-lunisolar
//!
//! Date tables for holidays that follow a lunar or lunisolar calendar.
//!
//! No astronomy happens here: dates are data. A [`LunisolarTable`] holds,
//! per holiday kind, a tier of estimated dates and a tier of exact
//! (officially announced) dates; the exact tier wins. Jurisdictions consume
//! tables through the [`CalendarProvider`] trait and record the results with
//! `ObservedHolidays::add_estimated_holiday`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The `CalendarProvider` trait and provider composition.
pub mod provider;

/// Two-tier estimated/exact date table and its TOML form.
pub mod table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use hol_time::EstimatedDate;
pub use provider::{CalendarProvider, LayeredProvider};
pub use table::LunisolarTable;
