//! The seam between jurisdiction rule logic and the engine.

use hol_core::errors::Result;
use hol_core::Year;

use crate::policy::ObservancePolicy;
use crate::registry::ObservedHolidays;
use crate::store::HolidayStore;

/// A country or subdivision supplying its own holiday rules.
///
/// Implementors provide the static [`ObservancePolicy`] and a `populate`
/// pass that records one year's holidays through the registry; the default
/// methods drive that pass per year. Calendar providers (lunisolar tables and
/// the like) are held as fields of the implementor.
pub trait Jurisdiction: Send + Sync {
    /// Human-readable name (e.g. `"United States"`).
    fn name(&self) -> &str {
        &self.policy().name
    }

    /// Static observance configuration.
    fn policy(&self) -> &ObservancePolicy;

    /// Record the holidays of `holidays.year()`, including observed ones.
    fn populate(&self, holidays: &mut ObservedHolidays<'_>) -> Result<()>;

    /// Holidays of `year` with the policy's observed flag.
    fn holidays(&self, year: Year) -> Result<HolidayStore> {
        self.holidays_with(year, self.policy().observed)
    }

    /// Holidays of `year` with observance forced on or off.
    fn holidays_with(&self, year: Year, observed: bool) -> Result<HolidayStore> {
        let policy = self.policy();
        let ctx = policy.context(year).with_observed(observed);
        let mut holidays = ObservedHolidays::with_context(policy, ctx);
        self.populate(&mut holidays)?;
        holidays.add_special_observed()?;
        Ok(holidays.into_store())
    }

    /// Holidays of every year in `years`, merged into one store. Each year
    /// is computed on its own store first.
    fn holidays_in_range(&self, years: impl IntoIterator<Item = Year>) -> Result<HolidayStore>
    where
        Self: Sized,
    {
        let mut all = HolidayStore::new();
        for year in years {
            all.extend_from(&self.holidays(year)?);
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SAT_SUN_TO_NEXT_MON;
    use chrono::NaiveDate;

    struct Island {
        policy: ObservancePolicy,
    }

    impl Jurisdiction for Island {
        fn policy(&self) -> &ObservancePolicy {
            &self.policy
        }

        fn populate(&self, holidays: &mut ObservedHolidays<'_>) -> Result<()> {
            let jan_1 = holidays.add_holiday("New Year's Day", (1, 1))?;
            holidays.add_observed(jan_1, None)?;
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn observed_toggle() {
        let island = Island {
            policy: ObservancePolicy::new("Island", SAT_SUN_TO_NEXT_MON),
        };
        assert_eq!(island.name(), "Island");
        // 2022-01-01 is a Saturday
        let on = island.holidays(2022).unwrap();
        assert!(on.contains(date(2022, 1, 3)));
        let off = island.holidays_with(2022, false).unwrap();
        assert_eq!(off.dates(), vec![date(2022, 1, 1)]);
    }

    #[test]
    fn range_merges_years() {
        let island = Island {
            policy: ObservancePolicy::new("Island", SAT_SUN_TO_NEXT_MON),
        };
        let all = island.holidays_in_range(2021..=2023).unwrap();
        assert_eq!(
            all.dates(),
            vec![
                date(2021, 1, 1),
                date(2022, 1, 1),
                date(2022, 1, 3),
                date(2023, 1, 1),
                date(2023, 1, 2),
            ]
        );
    }

    #[test]
    fn special_observed_follow_the_flag() {
        let policy = ObservancePolicy::new("Island", SAT_SUN_TO_NEXT_MON)
            .with_special_observed(date(2022, 6, 3), "Platinum Jubilee")
            .unwrap();
        let island = Island { policy };
        let on = island.holidays(2022).unwrap();
        assert_eq!(on.names_at(date(2022, 6, 3)), ["Platinum Jubilee (Observed)"]);
        assert!(!island.holidays_with(2022, false).unwrap().contains(date(2022, 6, 3)));
        assert!(!island.holidays(2023).unwrap().contains(date(2023, 6, 3)));
    }
}
