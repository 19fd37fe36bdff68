//! Static per-jurisdiction observance configuration.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use hol_core::errors::{Error, Result};
use hol_core::Year;
use hol_time::WeekdaySet;

use crate::context::ResolutionContext;
use crate::label::ObservedLabels;
use crate::rule::ObservedRule;

/// A one-off observed holiday declared for a specific date (e.g. a
/// substitute day proclaimed for a jubilee).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialHoliday {
    /// Date the substitute day is observed on.
    pub date: NaiveDate,
    /// Holiday name, before the observed label is applied.
    pub name: String,
}

/// Observance policy of one jurisdiction.
///
/// Shared read-only by every year computation of that jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservancePolicy {
    /// Jurisdiction name, used in log records.
    pub name: String,
    /// Default transition table.
    pub rule: ObservedRule,
    /// Observance enabled by default.
    pub observed: bool,
    /// First year observed dates are computed for.
    pub observed_since: Option<Year>,
    /// Weekend days.
    pub weekend: WeekdaySet,
    /// Label templates.
    pub labels: ObservedLabels,
    special_observed: BTreeMap<Year, Vec<SpecialHoliday>>,
}

impl ObservancePolicy {
    /// Policy with the given default rule, observance on, Saturday/Sunday
    /// weekend and `"%s (Observed)"` labels.
    pub fn new(name: impl Into<String>, rule: ObservedRule) -> Self {
        Self {
            name: name.into(),
            rule,
            observed: true,
            observed_since: None,
            weekend: WeekdaySet::SAT_SUN,
            labels: ObservedLabels::default(),
            special_observed: BTreeMap::new(),
        }
    }

    /// Set the default observed flag.
    pub fn with_observed(mut self, observed: bool) -> Self {
        self.observed = observed;
        self
    }

    /// Only compute observed dates from `year` on.
    pub fn with_observed_since(mut self, year: Year) -> Self {
        self.observed_since = Some(year);
        self
    }

    /// Set the weekend mask.
    pub fn with_weekend(mut self, weekend: WeekdaySet) -> Self {
        self.weekend = weekend;
        self
    }

    /// Set the label templates.
    pub fn with_labels(mut self, labels: ObservedLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Declare a special observed holiday.
    ///
    /// # Errors
    /// [`Error::EmptyName`] if `name` is blank.
    pub fn with_special_observed(mut self, date: NaiveDate, name: impl Into<String>) -> Result<Self> {
        self.add_special_observed(date, name)?;
        Ok(self)
    }

    /// In-place form of [`with_special_observed`](Self::with_special_observed).
    pub fn add_special_observed(&mut self, date: NaiveDate, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        self.special_observed
            .entry(date.year())
            .or_default()
            .push(SpecialHoliday { date, name });
        Ok(())
    }

    /// Special observed holidays declared for `year`.
    pub fn special_observed(&self, year: Year) -> &[SpecialHoliday] {
        self.special_observed
            .get(&year)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolution context for `year` using the policy defaults.
    pub fn context(&self, year: Year) -> ResolutionContext {
        ResolutionContext {
            year,
            observed: self.observed,
            observed_since: self.observed_since,
            weekend: self.weekend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SAT_SUN_TO_NEXT_MON;

    #[test]
    fn context_carries_defaults() {
        let policy = ObservancePolicy::new("Chile", SAT_SUN_TO_NEXT_MON)
            .with_observed_since(2000)
            .with_weekend(WeekdaySet::SUN_ONLY);
        let ctx = policy.context(1999);
        assert_eq!(ctx.year, 1999);
        assert_eq!(ctx.observed_since, Some(2000));
        assert_eq!(ctx.weekend, WeekdaySet::SUN_ONLY);
        assert!(!ctx.is_observed());
        assert!(policy.context(2000).is_observed());
    }

    #[test]
    fn special_observed_by_year() {
        let d = NaiveDate::from_ymd_opt(2022, 6, 3).unwrap();
        let policy = ObservancePolicy::new("UK", SAT_SUN_TO_NEXT_MON)
            .with_special_observed(d, "Platinum Jubilee")
            .unwrap();
        assert_eq!(policy.special_observed(2022).len(), 1);
        assert!(policy.special_observed(2023).is_empty());
        assert!(ObservancePolicy::new("UK", SAT_SUN_TO_NEXT_MON)
            .with_special_observed(d, " ")
            .is_err());
    }
}
