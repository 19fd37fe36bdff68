//! Year-keyed holiday store.
//!
//! An ordered map from date to one or more holiday names. A date is present
//! only while it has at least one name.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use hol_core::errors::{Error, Result};
use hol_core::NAME_SEPARATOR;

/// Ordered `date → names` mapping used as the working state of one
/// (jurisdiction, year) computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayStore {
    data: BTreeMap<NaiveDate, Vec<String>>,
}

impl HolidayStore {
    // ── Constructors ─────────────────────────────────────────────────────

    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ─────────────────────────────────────────────────────────

    /// Record `name` at `date`, appending to any names already there.
    ///
    /// A name already present at `date` is not added twice.
    ///
    /// # Errors
    /// [`Error::EmptyName`] if `name` is empty or blank.
    pub fn insert(&mut self, date: NaiveDate, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        let names = self.data.entry(date).or_default();
        if !names.contains(&name) {
            names.push(name);
        }
        Ok(())
    }

    /// Remove every name at `date`, returning them.
    pub fn remove(&mut self, date: NaiveDate) -> Option<Vec<String>> {
        self.data.remove(&date)
    }

    /// Remove a single name at `date`. The date disappears with its last
    /// name. Returns `true` if the name was present.
    pub fn remove_name(&mut self, date: NaiveDate, name: &str) -> bool {
        let Some(names) = self.data.get_mut(&date) else {
            return false;
        };
        let before = names.len();
        names.retain(|n| n != name);
        let removed = names.len() != before;
        if names.is_empty() {
            self.data.remove(&date);
        }
        removed
    }

    /// Merge every entry of `other` into this store.
    pub fn extend_from(&mut self, other: &HolidayStore) {
        for (date, names) in &other.data {
            let ours = self.data.entry(*date).or_default();
            for name in names {
                if !ours.contains(name) {
                    ours.push(name.clone());
                }
            }
        }
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Return `true` if `date` holds at least one holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.data.contains_key(&date)
    }

    /// Names at `date` in insertion order (empty if none).
    pub fn names_at(&self, date: NaiveDate) -> &[String] {
        self.data.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names at `date` joined for display, or `None` if the date is free.
    pub fn get(&self, date: NaiveDate) -> Option<String> {
        self.data.get(&date).map(|names| names.join(NAME_SEPARATOR))
    }

    /// Number of dates holding holidays.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All dates in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.data.keys().copied().collect()
    }

    /// Iterate over `(date, names)` in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[String])> {
        self.data.iter().map(|(d, names)| (*d, names.as_slice()))
    }

    /// Dates in `[from, to]` in ascending order.
    pub fn dates_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        if from > to {
            return Vec::new();
        }
        self.data.range(from..=to).map(|(d, _)| *d).collect()
    }
}

impl std::fmt::Display for HolidayStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (date, names) in &self.data {
            writeln!(f, "{date}: {}", names.join(NAME_SEPARATOR))?;
        }
        Ok(())
    }
}
