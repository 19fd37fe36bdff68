//! Observed holiday registry.
//!
//! [`ObservedHolidays`] owns the store of one (jurisdiction, year)
//! computation and applies the resolver to it. Results are written back into
//! the store, so later resolutions see (and scan past) earlier ones.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use hol_core::errors::{Error, Result};
use hol_core::Year;
use hol_time::{DateArg, EstimatedDate};
use tracing::{debug, trace, warn};

use crate::context::ResolutionContext;
use crate::policy::ObservancePolicy;
use crate::resolver::resolve;
use crate::rule::{ObservedRule, Shift};
use crate::store::HolidayStore;

/// Working state of one year's population pass.
#[derive(Debug, Clone)]
pub struct ObservedHolidays<'p> {
    policy: &'p ObservancePolicy,
    ctx: ResolutionContext,
    store: HolidayStore,
}

impl<'p> ObservedHolidays<'p> {
    /// Start an empty pass for `year` with the policy defaults.
    pub fn new(policy: &'p ObservancePolicy, year: Year) -> Self {
        Self::with_context(policy, policy.context(year))
    }

    /// Start an empty pass with an explicit context (e.g. observance
    /// switched off by the caller).
    pub fn with_context(policy: &'p ObservancePolicy, ctx: ResolutionContext) -> Self {
        Self {
            policy,
            ctx,
            store: HolidayStore::new(),
        }
    }

    /// Replace the working store.
    pub fn with_store(mut self, store: HolidayStore) -> Self {
        self.store = store;
        self
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// The year being populated.
    pub fn year(&self) -> Year {
        self.ctx.year
    }

    /// The resolution context.
    pub fn context(&self) -> &ResolutionContext {
        &self.ctx
    }

    /// The jurisdiction policy.
    pub fn policy(&self) -> &'p ObservancePolicy {
        self.policy
    }

    /// The working store.
    pub fn store(&self) -> &HolidayStore {
        &self.store
    }

    /// Finish the pass and hand over the store.
    pub fn into_store(self) -> HolidayStore {
        self.store
    }

    // ── Nominal holidays ─────────────────────────────────────────────────

    /// Record `name` at `dt` (a date or a month/day in the working year).
    pub fn add_holiday(&mut self, name: &str, dt: impl Into<DateArg>) -> Result<NaiveDate> {
        let date = dt.into().resolve(self.ctx.year)?;
        self.store.insert(date, name)?;
        Ok(date)
    }

    /// Record a provider-supplied date, applying the estimated label when the
    /// provider reports an estimate.
    pub fn add_estimated_holiday(&mut self, name: &str, estimate: EstimatedDate) -> Result<NaiveDate> {
        let name = if estimate.is_estimate {
            self.policy.labels.estimated_name(name)
        } else {
            name.to_string()
        };
        self.store.insert(estimate.date, name)?;
        Ok(estimate.date)
    }

    // ── Observed holidays ────────────────────────────────────────────────

    /// Add observed entries for every holiday at `dt`.
    ///
    /// Uses `rule`, or the policy default when `None`. Returns `(true,
    /// observed_date)` when entries were added, `(false, dt)` when the date
    /// does not shift, observance is off for the year, or `dt` holds no
    /// holiday. The original entry is kept.
    pub fn add_observed(
        &mut self,
        dt: impl Into<DateArg>,
        rule: Option<&ObservedRule>,
    ) -> Result<(bool, NaiveDate)> {
        let date = dt.into().resolve(self.ctx.year)?;
        self.observe(date, None, rule.copied(), true)
    }

    /// Like [`add_observed`](Self::add_observed) but for a single holiday
    /// name, whether or not it is recorded at `dt`.
    pub fn add_observed_name(
        &mut self,
        dt: impl Into<DateArg>,
        name: &str,
        rule: Option<&ObservedRule>,
    ) -> Result<(bool, NaiveDate)> {
        let date = dt.into().resolve(self.ctx.year)?;
        self.observe(date, Some(name), rule.copied(), true)
    }

    /// Relocate the holidays at `dt` to their observed date, labelled as
    /// observed. On success the original entry is removed.
    pub fn move_holiday(
        &mut self,
        dt: impl Into<DateArg>,
        rule: Option<&ObservedRule>,
    ) -> Result<(bool, NaiveDate)> {
        self.relocate(dt.into(), rule.copied(), true)
    }

    /// Relocate the holidays at `dt` keeping their names unchanged.
    pub fn move_holiday_unlabeled(
        &mut self,
        dt: impl Into<DateArg>,
        rule: Option<&ObservedRule>,
    ) -> Result<(bool, NaiveDate)> {
        self.relocate(dt.into(), rule.copied(), false)
    }

    /// Add observed entries for every date in `dates`, in ascending order,
    /// using the policy rule.
    ///
    /// With `multiple` set, each name at a date is resolved on its own, so
    /// holidays sharing a date can end up on different observed dates.
    pub fn populate_observed(
        &mut self,
        dates: impl IntoIterator<Item = NaiveDate>,
        multiple: bool,
    ) -> Result<()> {
        if !self.ctx.is_observed() {
            trace!(year = self.ctx.year, "observance off, skipping batch");
            return Ok(());
        }
        let dates: BTreeSet<NaiveDate> = dates.into_iter().collect();
        for date in dates {
            if multiple {
                let names = self.store.names_at(date).to_vec();
                for name in &names {
                    self.observe(date, Some(name.as_str()), None, true)?;
                }
            } else {
                self.observe(date, None, None, true)?;
            }
        }
        Ok(())
    }

    /// Add the policy's special observed holidays for the working year.
    /// Returns how many were added.
    pub fn add_special_observed(&mut self) -> Result<usize> {
        if !self.ctx.observed {
            return Ok(0);
        }
        let policy = self.policy;
        let specials = policy.special_observed(self.ctx.year);
        for special in specials {
            let name = policy.labels.observed_name(&special.name, false);
            self.store.insert(special.date, name)?;
        }
        Ok(specials.len())
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn relocate(
        &mut self,
        dt: DateArg,
        rule: Option<ObservedRule>,
        labelled: bool,
    ) -> Result<(bool, NaiveDate)> {
        let date = dt.resolve(self.ctx.year)?;
        let (moved, target) = self.observe(date, None, rule, labelled)?;
        if moved {
            self.store.remove(date);
            debug!(jurisdiction = %self.policy.name, %date, %target, "moved holiday");
        }
        Ok((moved, target))
    }

    fn observe(
        &mut self,
        date: NaiveDate,
        name: Option<&str>,
        rule: Option<ObservedRule>,
        labelled: bool,
    ) -> Result<(bool, NaiveDate)> {
        if name.is_some_and(|n| n.trim().is_empty()) {
            return Err(Error::EmptyName);
        }
        if !self.ctx.is_observed() {
            return Ok((false, date));
        }
        let names: Vec<String> = match name {
            Some(n) => vec![n.to_string()],
            None => self.store.names_at(date).to_vec(),
        };
        if names.is_empty() {
            trace!(%date, "no holiday to observe");
            return Ok((false, date));
        }

        let rule = rule.unwrap_or(self.policy.rule);
        let observed = resolve(date, &rule, &self.store, &self.ctx);
        if observed == date {
            return Ok((false, date));
        }
        if let Some(Shift::Days(delta)) = rule.shift_for(date) {
            if self.store.contains(observed) || self.ctx.is_weekend(observed) {
                warn!(
                    jurisdiction = %self.policy.name,
                    %date,
                    %observed,
                    delta,
                    "fixed-offset observed date lands on a weekend day or an existing holiday"
                );
            }
        }

        let before = observed < date;
        for name in &names {
            let label = if labelled {
                self.policy.labels.observed_name(name, before)
            } else {
                name.clone()
            };
            debug!(
                jurisdiction = %self.policy.name,
                year = self.ctx.year,
                %date,
                %observed,
                name = %label,
                "adding observed holiday"
            );
            self.store.insert(observed, label)?;
        }
        Ok((true, observed))
    }
}
