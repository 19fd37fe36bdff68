//! Calendar providers.

use std::fmt;

use hol_core::Year;
use hol_time::EstimatedDate;

use crate::table::LunisolarTable;

/// Source of movable holiday dates.
///
/// Jurisdictions hold providers as fields and call them from their
/// populate pass.
pub trait CalendarProvider: Send + Sync + fmt::Debug {
    /// Every date of `kind` in `year`, ascending. Empty when unknown.
    fn holiday_dates(&self, kind: &str, year: Year) -> Vec<EstimatedDate>;

    /// The first date of `kind` in `year`.
    fn holiday_date(&self, kind: &str, year: Year) -> Option<EstimatedDate> {
        self.holiday_dates(kind, year).into_iter().next()
    }
}

impl CalendarProvider for LunisolarTable {
    fn holiday_dates(&self, kind: &str, year: Year) -> Vec<EstimatedDate> {
        self.dates(kind, year)
    }
}

impl<P: CalendarProvider + ?Sized> CalendarProvider for std::sync::Arc<P> {
    fn holiday_dates(&self, kind: &str, year: Year) -> Vec<EstimatedDate> {
        (**self).holiday_dates(kind, year)
    }
}

/// Providers consulted in order; the first one returning any date for a
/// (kind, year) pair answers.
#[derive(Debug, Default)]
pub struct LayeredProvider {
    layers: Vec<Box<dyn CalendarProvider>>,
}

impl LayeredProvider {
    /// No layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer with lower priority than the existing ones.
    pub fn with_layer(mut self, provider: impl CalendarProvider + 'static) -> Self {
        self.layers.push(Box::new(provider));
        self
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// `true` if there are no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl CalendarProvider for LayeredProvider {
    fn holiday_dates(&self, kind: &str, year: Year) -> Vec<EstimatedDate> {
        self.layers
            .iter()
            .map(|layer| layer.holiday_dates(kind, year))
            .find(|dates| !dates.is_empty())
            .unwrap_or_default()
    }
}
