//! Error types for the holidays workspace.
//!
//! Everything that can go wrong is a caller or configuration mistake: a
//! malformed transition table, an empty holiday name, an impossible date or a
//! broken policy file. Unresolvable observed dates are *not* errors; they
//! surface as a `false` "was observed" flag instead.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A transition table entry is malformed (zero delta, offset out of
    /// range, weekday ordinal out of range) or a named rule does not exist.
    #[error("invalid observed rule: {0}")]
    InvalidRule(String),

    /// A holiday name was empty or blank.
    #[error("holiday name must not be empty")]
    EmptyName,

    /// Date-related error (impossible month/day, unparsable string, ...).
    #[error("date error: {0}")]
    Date(String),

    /// Policy or provider configuration could not be parsed or validated.
    #[error("config error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::$variant(...))` if `$cond` is false.
///
/// `$variant` names one of the message-carrying [`Error`] variants.
///
/// # Example
/// ```
/// use hol_core::{ensure, errors::Error};
/// fn non_zero(delta: i32) -> hol_core::errors::Result<i32> {
///     ensure!(delta != 0, InvalidRule, "delta must be non-zero, got {delta}");
///     Ok(delta)
/// }
/// assert!(non_zero(1).is_ok());
/// assert_eq!(
///     non_zero(0),
///     Err(Error::InvalidRule("delta must be non-zero, got 0".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$variant(format!($($msg)*)));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidRule("zero delta for Monday".into()).to_string(),
            "invalid observed rule: zero delta for Monday"
        );
        assert_eq!(Error::EmptyName.to_string(), "holiday name must not be empty");
        assert_eq!(
            Error::Config("missing rule".into()).to_string(),
            "config error: missing rule"
        );
    }

    fn checked(template: &str) -> Result<&str> {
        crate::ensure!(template.contains("%s"), Config, "template '{template}' has no placeholder");
        Ok(template)
    }

    #[test]
    fn ensure_macro_picks_variant() {
        assert_eq!(checked("%s (Observed)"), Ok("%s (Observed)"));
        assert_eq!(
            checked("Observed"),
            Err(Error::Config("template 'Observed' has no placeholder".into()))
        );
    }
}
