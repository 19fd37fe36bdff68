//! Two-tier lunisolar date table.
//!
//! ```toml
//! [kinds.chinese_new_year]
//! estimated = ["2025-01-29", "2026-02-17"]
//! exact = ["2025-01-29"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use hol_core::ensure;
use hol_core::errors::{Error, Result};
use hol_core::Year;
use hol_time::{parse_date, EstimatedDate};
use serde::Deserialize;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Tiers {
    estimated: BTreeMap<Year, Vec<NaiveDate>>,
    exact: BTreeMap<Year, Vec<NaiveDate>>,
}

/// Dates of movable holidays, keyed by holiday kind and Gregorian year.
///
/// For a given kind and year, exact dates replace estimated ones entirely.
/// A kind can fall more than once in a Gregorian year (Islamic holidays do,
/// roughly every 33 years), so lookups return every date for the year in
/// ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LunisolarTable {
    kinds: BTreeMap<String, Tiers>,
}

impl LunisolarTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an estimated date for `kind`.
    pub fn add_estimated(&mut self, kind: impl Into<String>, date: NaiveDate) {
        let tiers = self.kinds.entry(kind.into()).or_default();
        push_sorted(tiers.estimated.entry(date.year()).or_default(), date);
    }

    /// Record an exact date for `kind`. Once a year has an exact date, its
    /// estimated dates are no longer reported.
    pub fn add_exact(&mut self, kind: impl Into<String>, date: NaiveDate) {
        let tiers = self.kinds.entry(kind.into()).or_default();
        push_sorted(tiers.exact.entry(date.year()).or_default(), date);
    }

    /// Builder form of [`add_estimated`](Self::add_estimated) for many dates.
    pub fn with_estimated(
        mut self,
        kind: &str,
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        for date in dates {
            self.add_estimated(kind, date);
        }
        self
    }

    /// Builder form of [`add_exact`](Self::add_exact) for many dates.
    pub fn with_exact(mut self, kind: &str, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        for date in dates {
            self.add_exact(kind, date);
        }
        self
    }

    /// Dates of `kind` in `year`, exact tier first. Empty if neither tier
    /// knows the year.
    pub fn dates(&self, kind: &str, year: Year) -> Vec<EstimatedDate> {
        let Some(tiers) = self.kinds.get(kind) else {
            trace!(kind, "unknown holiday kind");
            return Vec::new();
        };
        if let Some(exact) = tiers.exact.get(&year) {
            return exact.iter().copied().map(EstimatedDate::exact).collect();
        }
        match tiers.estimated.get(&year) {
            Some(estimated) => estimated.iter().copied().map(EstimatedDate::estimated).collect(),
            None => {
                trace!(kind, year, "no date for year");
                Vec::new()
            }
        }
    }

    /// Holiday kinds in the table, sorted.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }

    /// Years with at least one date (either tier) for `kind`.
    pub fn years(&self, kind: &str) -> Vec<Year> {
        let Some(tiers) = self.kinds.get(kind) else {
            return Vec::new();
        };
        let mut years: Vec<Year> = tiers.estimated.keys().chain(tiers.exact.keys()).copied().collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// `true` if the table has no dates at all.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    // ── TOML ─────────────────────────────────────────────────────────────

    /// Parse a table from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let cfg: TableConfig = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        let table = Self::try_from(cfg)?;
        debug!(kinds = table.kinds.len(), "loaded lunisolar table");
        Ok(table)
    }

    /// Read and parse a table file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }
}

fn push_sorted(dates: &mut Vec<NaiveDate>, date: NaiveDate) {
    if let Err(pos) = dates.binary_search(&date) {
        dates.insert(pos, date);
    }
}

/// Raw table file contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Holiday kind → dates.
    #[serde(default)]
    pub kinds: BTreeMap<String, KindConfig>,
}

/// Dates of one holiday kind, as ISO strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindConfig {
    /// Estimated dates.
    #[serde(default)]
    pub estimated: Vec<String>,
    /// Exact dates.
    #[serde(default)]
    pub exact: Vec<String>,
}

impl TryFrom<TableConfig> for LunisolarTable {
    type Error = Error;

    fn try_from(cfg: TableConfig) -> Result<Self> {
        let mut table = LunisolarTable::new();
        for (kind, dates) in cfg.kinds {
            ensure!(!kind.trim().is_empty(), Config, "empty holiday kind");
            for s in &dates.estimated {
                table.add_estimated(kind.as_str(), parse(&kind, s)?);
            }
            for s in &dates.exact {
                table.add_exact(kind.as_str(), parse(&kind, s)?);
            }
        }
        Ok(table)
    }
}

fn parse(kind: &str, s: &str) -> Result<NaiveDate> {
    parse_date(s).map_err(|e| Error::Config(format!("{kind}: {e}")))
}
