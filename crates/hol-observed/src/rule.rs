//! Weekday transition tables.
//!
//! An [`ObservedRule`] maps each weekday to the shift applied to a holiday
//! that lands on it. A delta of exactly `+7` / `-7` does not move the date by
//! a week: it means "scan forward / backward to the next day that is neither a
//! weekend day nor already a holiday".

use std::ops::Add;

use chrono::{Datelike, NaiveDate, Weekday};
use hol_core::errors::{Error, Result};
use hol_core::{ensure, DayDelta};
use hol_time::weekday::{from_ordinal, ordinal, MON, SUN};

/// Delta magnitude reserved for the scan-to-nearest-workday sentinel.
pub const SCAN_DELTA: DayDelta = 7;

/// How a holiday landing on a given weekday is shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    /// Fixed offset in calendar days, no collision checking.
    Days(DayDelta),
    /// Scan forward to the next free workday (`+7`).
    NextWorkday,
    /// Scan backward to the previous free workday (`-7`).
    PreviousWorkday,
}

impl Shift {
    /// Interpret a raw table delta. Zero has no meaning and is rejected.
    pub fn from_delta(delta: DayDelta) -> Result<Self> {
        ensure!(delta != 0, InvalidRule, "delta must be non-zero");
        ensure!(
            delta.unsigned_abs() <= u32::from(i8::MAX.unsigned_abs()),
            InvalidRule,
            "delta {delta} is out of range [-{max}, {max}]",
            max = i8::MAX
        );
        Ok(match delta {
            SCAN_DELTA => Shift::NextWorkday,
            d if d == -SCAN_DELTA => Shift::PreviousWorkday,
            d => Shift::Days(d),
        })
    }

    /// The raw table delta for this shift.
    pub fn delta(self) -> DayDelta {
        match self {
            Shift::Days(d) => d,
            Shift::NextWorkday => SCAN_DELTA,
            Shift::PreviousWorkday => -SCAN_DELTA,
        }
    }

    /// Return `true` for the scan sentinels.
    pub fn is_scan(self) -> bool {
        !matches!(self, Shift::Days(_))
    }
}

/// A weekday → shift transition table.
///
/// Cheap to copy; composition never mutates either operand.
///
/// # Example
/// ```
/// use chrono::Weekday;
/// use hol_observed::rule::{ObservedRule, Shift};
/// use hol_observed::rules::{ALL_TO_NEAREST_MON, FRI_TO_NEXT_WORKDAY};
///
/// let rule = ALL_TO_NEAREST_MON + FRI_TO_NEXT_WORKDAY;
/// assert_eq!(rule.get(Weekday::Fri), Some(Shift::NextWorkday));
/// assert_eq!(rule.get(Weekday::Sat), Some(Shift::Days(2)));
/// assert_eq!(rule.get(Weekday::Mon), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObservedRule {
    // Indexed by Monday-first ordinal; 0 marks "no entry".
    deltas: [i8; 7],
}

impl ObservedRule {
    /// The table with no entries: nothing is ever shifted.
    pub const EMPTY: ObservedRule = ObservedRule { deltas: [0; 7] };

    /// Build a table from `(weekday, delta)` entries.
    ///
    /// A weekday listed twice keeps its last delta.
    ///
    /// # Errors
    /// [`Error::InvalidRule`] if any delta is zero or does not fit a table
    /// entry.
    pub fn new(entries: impl IntoIterator<Item = (Weekday, DayDelta)>) -> Result<Self> {
        let mut deltas = [0i8; 7];
        for (weekday, delta) in entries {
            let shift = Shift::from_delta(delta).map_err(|e| match e {
                Error::InvalidRule(msg) => Error::InvalidRule(format!("{weekday}: {msg}")),
                other => other,
            })?;
            deltas[ordinal(weekday) as usize] = i8::try_from(shift.delta())
                .map_err(|_| Error::InvalidRule(format!("{weekday}: delta {delta} does not fit a table entry")))?;
        }
        Ok(Self { deltas })
    }

    /// Build a table from Monday-first ordinal (0–6) entries.
    pub fn from_ordinals(entries: impl IntoIterator<Item = (u8, DayDelta)>) -> Result<Self> {
        let entries = entries
            .into_iter()
            .map(|(n, delta)| {
                from_ordinal(n)
                    .map(|w| (w, delta))
                    .ok_or_else(|| Error::InvalidRule(format!("weekday ordinal {n} out of range [0, 6]")))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Compile-time constructor for the built-in catalogue. Entries are
    /// trusted: ordinals must be 0–6 and deltas non-zero.
    pub(crate) const fn table(entries: &[(u8, i8)]) -> Self {
        let mut deltas = [0i8; 7];
        let mut i = 0;
        while i < entries.len() {
            let (n, delta) = entries[i];
            assert!(n <= SUN && delta != 0, "malformed built-in observed rule");
            deltas[n as usize] = delta;
            i += 1;
        }
        Self { deltas }
    }

    /// The shift for `weekday`, or `None` if the table has no entry.
    pub fn get(&self, weekday: Weekday) -> Option<Shift> {
        match self.deltas[ordinal(weekday) as usize] {
            0 => None,
            d => Shift::from_delta(d as DayDelta).ok(),
        }
    }

    /// The shift for the weekday of `date`.
    pub fn shift_for(&self, date: NaiveDate) -> Option<Shift> {
        self.get(date.weekday())
    }

    /// Raw delta for `weekday` (0 when absent).
    pub fn delta(&self, weekday: Weekday) -> DayDelta {
        self.deltas[ordinal(weekday) as usize] as DayDelta
    }

    /// Union of both tables; where both define a weekday `other` wins.
    pub fn compose(&self, other: &ObservedRule) -> ObservedRule {
        let mut deltas = self.deltas;
        for (slot, &theirs) in deltas.iter_mut().zip(other.deltas.iter()) {
            if theirs != 0 {
                *slot = theirs;
            }
        }
        ObservedRule { deltas }
    }

    /// Return `true` if no weekday is shifted.
    pub fn is_empty(&self) -> bool {
        self.deltas.iter().all(|&d| d == 0)
    }

    /// Iterate over the defined entries, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, Shift)> + '_ {
        (MON..=SUN).filter_map(move |n| {
            let weekday = from_ordinal(n)?;
            self.get(weekday).map(|shift| (weekday, shift))
        })
    }
}

impl Add for ObservedRule {
    type Output = ObservedRule;

    fn add(self, rhs: ObservedRule) -> ObservedRule {
        self.compose(&rhs)
    }
}

impl std::fmt::Debug for ObservedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ObservedRule{self}")
    }
}

impl std::fmt::Display for ObservedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, (weekday, shift)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{weekday}: {:+}", shift.delta())?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delta_rejected() {
        let err = ObservedRule::new([(Weekday::Sat, 2), (Weekday::Sun, 0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidRule(_)));
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(ObservedRule::new([(Weekday::Sun, 400)]).is_err());
        assert!(ObservedRule::from_ordinals([(7, 1)]).is_err());
    }

    #[test]
    fn extreme_deltas_rejected() {
        for delta in [i32::MIN, i32::MAX, 128, -128] {
            let err = ObservedRule::new([(Weekday::Sun, delta)]).unwrap_err();
            assert!(matches!(err, Error::InvalidRule(_)), "{delta}: {err:?}");
            assert!(Shift::from_delta(delta).is_err());
        }
        let edge = ObservedRule::new([(Weekday::Sat, 127), (Weekday::Sun, -127)]).unwrap();
        assert_eq!(edge.get(Weekday::Sat), Some(Shift::Days(127)));
        assert_eq!(edge.get(Weekday::Sun), Some(Shift::Days(-127)));
    }

    #[test]
    fn scan_sentinels() {
        let rule = ObservedRule::new([(Weekday::Sat, -7), (Weekday::Sun, 7)]).unwrap();
        assert_eq!(rule.get(Weekday::Sat), Some(Shift::PreviousWorkday));
        assert_eq!(rule.get(Weekday::Sun), Some(Shift::NextWorkday));
        assert!(rule.get(Weekday::Sun).unwrap().is_scan());
        assert_eq!(rule.get(Weekday::Mon), None);
        assert_eq!(rule.delta(Weekday::Mon), 0);
    }

    #[test]
    fn compose_right_side_wins() {
        let a = ObservedRule::new([(Weekday::Fri, 3), (Weekday::Sat, 2)]).unwrap();
        let b = ObservedRule::new([(Weekday::Fri, 7)]).unwrap();
        let c = a + b;
        assert_eq!(c.get(Weekday::Fri), Some(Shift::NextWorkday));
        assert_eq!(c.get(Weekday::Sat), Some(Shift::Days(2)));
        // operands untouched
        assert_eq!(a.get(Weekday::Fri), Some(Shift::Days(3)));
        assert_eq!(b.compose(&a).get(Weekday::Fri), Some(Shift::Days(3)));
    }

    #[test]
    fn duplicate_entry_keeps_last() {
        let rule = ObservedRule::new([(Weekday::Sun, 1), (Weekday::Sun, 2)]).unwrap();
        assert_eq!(rule.get(Weekday::Sun), Some(Shift::Days(2)));
    }

    #[test]
    fn display() {
        let rule = ObservedRule::from_ordinals([(5, 2), (6, 1)]).unwrap();
        assert_eq!(rule.to_string(), "{Sat: +2, Sun: +1}");
        assert_eq!(ObservedRule::EMPTY.to_string(), "{}");
        assert!(ObservedRule::EMPTY.is_empty());
    }
}
