//! # hol-observed
//!
//! The observed-holiday rule engine.
//!
//! A jurisdiction records its holidays for one year through an
//! [`ObservedHolidays`] registry and asks it for observed (substitute) dates.
//! The registry resolves each nominal date against a weekday
//! [`ObservedRule`] and writes the result back into the year's
//! [`HolidayStore`].
//!
//! ```
//! use chrono::NaiveDate;
//! use hol_observed::rules::SAT_SUN_TO_NEXT_MON;
//! use hol_observed::{ObservancePolicy, ObservedHolidays};
//!
//! let policy = ObservancePolicy::new("Example", SAT_SUN_TO_NEXT_MON);
//! let mut holidays = ObservedHolidays::new(&policy, 2022);
//! let christmas = holidays.add_holiday("Christmas Day", (12, 25)).unwrap();
//! let (observed, date) = holidays.add_observed(christmas, None).unwrap();
//! assert!(observed);
//! assert_eq!(date, NaiveDate::from_ymd_opt(2022, 12, 26).unwrap());
//! assert_eq!(
//!     holidays.store().get(date).as_deref(),
//!     Some("Christmas Day (Observed)")
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// TOML policy files.
pub mod config;

/// Per-computation parameters (`ResolutionContext`).
pub mod context;

/// `Jurisdiction` trait.
pub mod jurisdiction;

/// Observed / estimated label templates.
pub mod label;

/// Static per-jurisdiction configuration.
pub mod policy;

/// The observed holiday registry.
pub mod registry;

/// Observed date resolution.
pub mod resolver;

/// Weekday transition tables.
pub mod rule;

/// Named transition tables.
pub mod rules;

/// Date → names store.
pub mod store;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use context::ResolutionContext;
pub use jurisdiction::Jurisdiction;
pub use label::ObservedLabels;
pub use policy::{ObservancePolicy, SpecialHoliday};
pub use registry::ObservedHolidays;
pub use resolver::{next_workday, resolve, Direction};
pub use rule::{ObservedRule, Shift};
pub use store::HolidayStore;
