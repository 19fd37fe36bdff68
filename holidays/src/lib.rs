//! # holidays
//!
//! Observed-holiday rule engine.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `hol-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! holidays = "0.1"
//! ```
//!
//! ```rust
//! use holidays::observed::{ObservancePolicy, ObservedHolidays};
//! use holidays::time::NaiveDate;
//!
//! let policy = ObservancePolicy::from_toml(
//!     r#"
//!     name = "Example"
//!     rule = "SAT_TO_PREV_FRI_SUN_TO_NEXT_MON"
//!     "#,
//! )?;
//!
//! let mut hol = ObservedHolidays::new(&policy, 2021);
//! let july_4 = hol.add_holiday("Independence Day", (7, 4))?;
//! hol.add_observed(july_4, None)?;
//!
//! let monday = NaiveDate::from_ymd_opt(2021, 7, 5).unwrap();
//! assert_eq!(hol.store().get(monday).as_deref(), Some("Independence Day (Observed)"));
//! # Ok::<(), holidays::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and shared aliases.
pub use hol_core as core;

/// Date helpers, weekday ordinals and weekend masks.
pub use hol_time as time;

/// Transition tables, resolver, registry, store and jurisdiction policy.
pub use hol_observed as observed;

/// Lunisolar date tables and calendar providers.
pub use hol_lunisolar as lunisolar;
