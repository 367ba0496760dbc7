//! Aggregate values recorded per week into monthly totals.
//!
//! Each week is counted once, in the month of its Monday, even when most of
//! its days belong to the following month.

use std::collections::BTreeMap;
use std::ops::AddAssign;

use calendar_keys::{MonthKey, WeekKey};

use crate::attribution::AttributedWeeks;

/// Sum values recorded per week into the months these weeks are attributed
/// to.
///
/// ```
/// use week_attribution::{rollup_by_month, MonthKey, WeekKey};
///
/// let week = |raw: &str| raw.parse::<WeekKey>().unwrap();
///
/// let totals = rollup_by_month([
///     (week("2024-01-22"), 1200),
///     (week("2024-01-29"), 1300),
///     (week("2024-02-05"), 1100),
/// ]);
///
/// assert_eq!(totals[&"2024-01".parse::<MonthKey>().unwrap()], 2500);
/// assert_eq!(totals[&"2024-02".parse::<MonthKey>().unwrap()], 1100);
/// ```
pub fn rollup_by_month<T, I>(entries: I) -> BTreeMap<MonthKey, T>
where
    I: IntoIterator<Item = (WeekKey, T)>,
    T: AddAssign + Default,
{
    let mut totals: BTreeMap<MonthKey, T> = BTreeMap::new();

    for (week, value) in entries {
        *totals.entry(week.month()).or_default() += value;
    }

    totals
}

impl AttributedWeeks {
    /// Sum the values of the weeks of this month. Weeks for which `value`
    /// returns `None` are skipped.
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use chrono::NaiveDate;
    /// use week_attribution::{weeks_belonging_to_month, Context, WeekKey};
    ///
    /// let ctx = Context::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    /// let salaries: HashMap<WeekKey, u32> = [
    ///     ("2024-01-29".parse::<WeekKey>().unwrap(), 700),
    ///     ("2024-02-05".parse::<WeekKey>().unwrap(), 500),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let february = weeks_belonging_to_month("2024-02".parse().unwrap(), &ctx);
    /// assert_eq!(february.total(|week| salaries.get(&week).copied()), 500);
    /// ```
    pub fn total<T, F>(&self, mut value: F) -> T
    where
        T: AddAssign + Default,
        F: FnMut(WeekKey) -> Option<T>,
    {
        let mut total = T::default();

        for week in self.keys() {
            if let Some(week_value) = value(week) {
                total += week_value;
            }
        }

        total
    }
}
