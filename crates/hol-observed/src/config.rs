//! TOML policy files.
//!
//! ```toml
//! name = "Isle of Man"
//! observed = true
//! observed_since = 1992
//! # a catalogue name, an inline table such as { sat = 2, sun = 1 },
//! # or a list composed left to right: ["ALL_TO_NEAREST_MON", { fri = 7 }]
//! rule = "SAT_SUN_TO_NEXT_MON"
//! weekend = ["sat", "sun"]
//!
//! [labels]
//! observed = "%s (Observed)"
//! observed_before = "%s (Observed, Preceding)"
//!
//! [[special_observed]]
//! date = "2022-06-03"
//! name = "Platinum Jubilee"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use hol_core::errors::{Error, Result};
use hol_core::{DayDelta, Year};
use hol_time::weekday::parse_weekday;
use hol_time::{parse_date, WeekdaySet};
use serde::Deserialize;

use crate::label::ObservedLabels;
use crate::policy::ObservancePolicy;
use crate::rule::ObservedRule;
use crate::rules;

/// Raw policy file contents.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Jurisdiction name.
    #[serde(default)]
    pub name: String,
    /// Observance enabled by default.
    #[serde(default = "default_observed")]
    pub observed: bool,
    /// First year observed dates are computed for.
    #[serde(default)]
    pub observed_since: Option<Year>,
    /// Default transition table; empty when absent.
    #[serde(default)]
    pub rule: Option<RuleConfig>,
    /// Weekend day names; Saturday/Sunday when absent.
    #[serde(default)]
    pub weekend: Option<Vec<String>>,
    /// Label templates.
    #[serde(default)]
    pub labels: LabelsConfig,
    /// One-off observed holidays.
    #[serde(default)]
    pub special_observed: Vec<SpecialConfig>,
}

fn default_observed() -> bool {
    true
}

/// A transition table given by name, inline, or as a list composed left to
/// right.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RuleConfig {
    /// A catalogue name such as `"SAT_SUN_TO_NEXT_MON"`.
    Named(String),
    /// Weekday name → delta.
    Table(BTreeMap<String, DayDelta>),
    /// Several rules composed in order, later entries winning.
    Composite(Vec<RuleConfig>),
}

impl RuleConfig {
    /// Build the transition table.
    pub fn build(&self) -> Result<ObservedRule> {
        match self {
            RuleConfig::Named(name) => rules::named(name)
                .ok_or_else(|| Error::InvalidRule(format!("unknown rule name '{name}'"))),
            RuleConfig::Table(entries) => {
                let entries = entries
                    .iter()
                    .map(|(day, &delta)| {
                        parse_weekday(day)
                            .map(|w| (w, delta))
                            .map_err(|e| Error::Config(e.to_string()))
                    })
                    .collect::<Result<Vec<_>>>()?;
                ObservedRule::new(entries)
            }
            RuleConfig::Composite(parts) => parts
                .iter()
                .try_fold(ObservedRule::EMPTY, |acc, part| -> Result<ObservedRule> {
                    Ok(acc + part.build()?)
                }),
        }
    }
}

/// Label templates; unset fields keep the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelsConfig {
    /// Observed template.
    pub observed: Option<String>,
    /// Template for observed dates preceding the holiday.
    pub observed_before: Option<String>,
    /// Estimated template.
    pub estimated: Option<String>,
    /// Observed-estimated template.
    pub observed_estimated: Option<String>,
}

impl LabelsConfig {
    fn build(&self) -> Result<ObservedLabels> {
        let mut labels = match &self.observed {
            Some(template) => ObservedLabels::new(template.clone())?,
            None => ObservedLabels::default(),
        };
        if let Some(template) = &self.observed_before {
            labels = labels.with_before(template.clone())?;
        }
        match (&self.estimated, &self.observed_estimated) {
            (Some(est), Some(obs_est)) => {
                labels = labels.with_estimated(est.clone(), obs_est.clone())?;
            }
            (None, None) => {}
            _ => {
                return Err(Error::Config(
                    "labels.estimated and labels.observed_estimated must be set together".into(),
                ))
            }
        }
        Ok(labels)
    }
}

/// A special observed holiday entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecialConfig {
    /// Date string (`YYYY-MM-DD`).
    pub date: String,
    /// Holiday name.
    pub name: String,
}

impl TryFrom<PolicyConfig> for ObservancePolicy {
    type Error = Error;

    fn try_from(cfg: PolicyConfig) -> Result<Self> {
        let rule = match &cfg.rule {
            Some(rule) => rule.build()?,
            None => ObservedRule::EMPTY,
        };
        let weekend = match &cfg.weekend {
            Some(days) => days
                .iter()
                .map(|d| parse_weekday(d).map_err(|e| Error::Config(e.to_string())))
                .collect::<Result<WeekdaySet>>()?,
            None => WeekdaySet::SAT_SUN,
        };
        let mut policy = ObservancePolicy::new(cfg.name, rule)
            .with_observed(cfg.observed)
            .with_weekend(weekend)
            .with_labels(cfg.labels.build()?);
        if let Some(year) = cfg.observed_since {
            policy = policy.with_observed_since(year);
        }
        for special in &cfg.special_observed {
            let date = parse_date(&special.date).map_err(|e| Error::Config(e.to_string()))?;
            policy.add_special_observed(date, special.name.clone())?;
        }
        Ok(policy)
    }
}

impl ObservancePolicy {
    /// Parse a policy from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let cfg: PolicyConfig = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        Self::try_from(cfg)
    }

    /// Read and parse a policy file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    const ISLE_OF_MAN: &str = r#"
        name = "Isle of Man"
        observed_since = 1992
        rule = "SAT_SUN_TO_NEXT_MON"

        [labels]
        observed = "%s (Observed)"
        observed_before = "%s (Observed, Preceding)"

        [[special_observed]]
        date = "2022-06-03"
        name = "Platinum Jubilee"
    "#;

    #[test]
    fn parse_full_policy() {
        let policy = ObservancePolicy::from_toml(ISLE_OF_MAN).unwrap();
        assert_eq!(policy.name, "Isle of Man");
        assert_eq!(policy.rule, rules::SAT_SUN_TO_NEXT_MON);
        assert_eq!(policy.observed_since, Some(1992));
        assert!(policy.observed);
        assert_eq!(policy.weekend, WeekdaySet::SAT_SUN);
        assert_eq!(
            policy.labels.observed_before.as_deref(),
            Some("%s (Observed, Preceding)")
        );
        assert_eq!(
            policy.special_observed(2022)[0].date,
            NaiveDate::from_ymd_opt(2022, 6, 3).unwrap()
        );
    }

    #[test]
    fn inline_and_composite_rules() {
        let policy = ObservancePolicy::from_toml(r#"rule = { sat = -1, sun = 1 }"#).unwrap();
        assert_eq!(policy.rule, rules::SAT_TO_PREV_FRI_SUN_TO_NEXT_MON);

        let policy =
            ObservancePolicy::from_toml(r#"rule = ["ALL_TO_NEAREST_MON", { fri = 7 }]"#).unwrap();
        assert_eq!(policy.rule, rules::ALL_TO_NEAREST_MON + rules::FRI_TO_NEXT_WORKDAY);
        assert_eq!(policy.rule.delta(Weekday::Thu), -3);
    }

    #[test]
    fn custom_weekend() {
        let policy = ObservancePolicy::from_toml(r#"weekend = ["fri", "sat"]"#).unwrap();
        assert_eq!(policy.weekend, WeekdaySet::FRI_SAT);
        assert!(policy.rule.is_empty());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            ObservancePolicy::from_toml(r#"rule = "NO_SUCH_RULE""#),
            Err(Error::InvalidRule(_))
        ));
        assert!(matches!(
            ObservancePolicy::from_toml(r#"rule = { sun = 0 }"#),
            Err(Error::InvalidRule(_))
        ));
        assert!(matches!(
            ObservancePolicy::from_toml(r#"rule = { funday = 1 }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ObservancePolicy::from_toml(r#"unknown_key = 1"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ObservancePolicy::from_toml("[labels]\nobserved = \"Observed\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ObservancePolicy::from_toml("[labels]\nestimated = \"%s (est)\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn rejects_extreme_table_deltas() {
        for text in [
            "rule = { sun = -2147483648 }",
            "rule = { sun = 2147483647 }",
            "rule = { sat = 128 }",
        ] {
            assert!(
                matches!(ObservancePolicy::from_toml(text), Err(Error::InvalidRule(_))),
                "{text}"
            );
        }
        assert!(matches!(
            ObservancePolicy::from_toml("rule = { sun = 9999999999 }"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            ObservancePolicy::from_file("/nonexistent/policy.toml"),
            Err(Error::Config(_))
        ));
    }
}
