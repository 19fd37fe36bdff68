//! # hol-core
//!
//! Core types and error definitions shared by every crate in the holidays
//! workspace: the error enum, the `ensure!` macro and a handful of
//! primitive type aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year (proleptic Gregorian, as used by `chrono`).
pub type Year = i32;

/// A signed number of calendar days.
pub type DayDelta = i32;

/// Separator used when several holiday names share one date.
pub const NAME_SEPARATOR: &str = "; ";

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
