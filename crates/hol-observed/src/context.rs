//! Explicit resolution parameters.

use chrono::NaiveDate;
use hol_core::Year;
use hol_time::WeekdaySet;

/// Everything an observed-date computation needs besides the rule and the
/// store: the working year, whether observance is on, the first year it
/// applies, and which weekdays count as the weekend.
///
/// Passed by reference into every resolver and registry call; there is no
/// ambient "current year".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolutionContext {
    /// The year being populated.
    pub year: Year,
    /// Observance enabled for the jurisdiction.
    pub observed: bool,
    /// Observed dates are only computed from this year on.
    pub observed_since: Option<Year>,
    /// Weekend days skipped by scan-mode resolution.
    pub weekend: WeekdaySet,
}

impl ResolutionContext {
    /// Context for `year` with observance on, no threshold and a
    /// Saturday/Sunday weekend.
    pub fn new(year: Year) -> Self {
        Self {
            year,
            observed: true,
            observed_since: None,
            weekend: WeekdaySet::SAT_SUN,
        }
    }

    /// Toggle observance.
    pub fn with_observed(mut self, observed: bool) -> Self {
        self.observed = observed;
        self
    }

    /// Set the observed-since threshold.
    pub fn with_observed_since(mut self, since: Option<Year>) -> Self {
        self.observed_since = since;
        self
    }

    /// Set the weekend mask.
    pub fn with_weekend(mut self, weekend: WeekdaySet) -> Self {
        self.weekend = weekend;
        self
    }

    /// Return `true` if observed dates may be computed for the working year.
    pub fn is_observed(&self) -> bool {
        self.observed && self.observed_since.map_or(true, |since| self.year >= since)
    }

    /// Return `true` if `date` falls on a weekend day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_since_threshold() {
        let ctx = ResolutionContext::new(1999).with_observed_since(Some(2000));
        assert!(!ctx.is_observed());
        assert!(ResolutionContext { year: 2000, ..ctx }.is_observed());
    }

    #[test]
    fn observed_flag_wins() {
        let ctx = ResolutionContext::new(2024).with_observed(false);
        assert!(!ctx.is_observed());
    }
}
