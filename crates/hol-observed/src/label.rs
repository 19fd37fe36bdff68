//! Observed and estimated name templates.
//!
//! Templates use `%s` as the placeholder for the holiday name, e.g.
//! `"%s (Observed)"`.

use hol_core::ensure;
use hol_core::errors::Result;

/// Placeholder replaced by the holiday name.
pub const PLACEHOLDER: &str = "%s";

/// Label templates applied to substitute and estimated entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedLabels {
    /// Template for observed dates after (or without a before-variant, any)
    /// the nominal date.
    pub observed: String,
    /// Template for observed dates preceding the nominal date.
    pub observed_before: Option<String>,
    /// Template marking a name whose date is an estimate.
    pub estimated: Option<String>,
    /// Template for observed entries of estimated holidays.
    pub observed_estimated: Option<String>,
}

impl Default for ObservedLabels {
    fn default() -> Self {
        Self {
            observed: "%s (Observed)".into(),
            observed_before: None,
            estimated: None,
            observed_estimated: None,
        }
    }
}

impl ObservedLabels {
    /// Labels with the given observed template and no variants.
    pub fn new(observed: impl Into<String>) -> Result<Self> {
        let observed = observed.into();
        check_template(&observed)?;
        Ok(Self {
            observed,
            ..Self::default()
        })
    }

    /// Set the template used when the observed date precedes the holiday.
    pub fn with_before(mut self, template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        check_template(&template)?;
        self.observed_before = Some(template);
        Ok(self)
    }

    /// Set the estimated and observed-estimated templates.
    pub fn with_estimated(
        mut self,
        estimated: impl Into<String>,
        observed_estimated: impl Into<String>,
    ) -> Result<Self> {
        let (estimated, observed_estimated) = (estimated.into(), observed_estimated.into());
        check_template(&estimated)?;
        check_template(&observed_estimated)?;
        self.estimated = Some(estimated);
        self.observed_estimated = Some(observed_estimated);
        Ok(self)
    }

    /// Name recorded for an estimated date.
    pub fn estimated_name(&self, name: &str) -> String {
        match &self.estimated {
            Some(template) => apply(template, name),
            None => name.to_string(),
        }
    }

    /// Name recorded at an observed date. `before` is `true` when the
    /// observed date precedes the nominal one.
    ///
    /// Names carrying the estimated marker use the observed-estimated
    /// template with the marker stripped.
    pub fn observed_name(&self, name: &str, before: bool) -> String {
        if let (Some(marker), Some(template)) = (self.estimated_marker(), &self.observed_estimated) {
            let tagged = format!("({marker})");
            if name.contains(&tagged) {
                return apply(template, name.replace(&tagged, "").trim());
            }
        }
        let template = match (&self.observed_before, before) {
            (Some(before_template), true) => before_template,
            _ => &self.observed,
        };
        apply(template, name)
    }

    /// The estimated template with placeholder, spaces and parentheses removed
    /// (`"%s (estimated)"` → `"estimated"`).
    fn estimated_marker(&self) -> Option<&str> {
        let template = self.estimated.as_deref()?;
        let (head, tail) = template.split_once(PLACEHOLDER)?;
        let marker = if head.trim().is_empty() { tail } else { head };
        let marker = marker.trim_matches(|c: char| c.is_whitespace() || c == '(' || c == ')');
        (!marker.is_empty()).then_some(marker)
    }
}

/// Substitute `name` into `template`.
pub fn apply(template: &str, name: &str) -> String {
    template.replacen(PLACEHOLDER, name, 1)
}

/// Reject templates without a placeholder.
pub fn check_template(template: &str) -> Result<()> {
    ensure!(
        template.contains(PLACEHOLDER),
        Config,
        "label template '{template}' has no {PLACEHOLDER} placeholder"
    );
    Ok(())
}
