use chrono::NaiveDate;

use calendar_keys::MonthKey;

use crate::context::Context;
use crate::week::{first_week_from, WeekInfo, WeekSteps};

/// Roughly two years of weeks.
const MAX_WEEKS_IN_RANGE: usize = 100;

/// List all weeks having at least one day in `[start, end]`, in chronological
/// order.
///
/// At most 100 weeks are listed: longer ranges are truncated after their
/// first 100 weeks. Weeks starting outside of 4-digit years have no key and
/// are skipped.
///
/// ```
/// use chrono::NaiveDate;
/// use week_attribution::{weeks_for_date_range, Context};
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let ctx = Context::new(date(2024, 6, 1));
/// let weeks = weeks_for_date_range(date(2024, 1, 31), date(2024, 2, 12), &ctx);
///
/// let labels: Vec<_> = weeks.iter().map(|week| week.label()).collect();
/// assert_eq!(labels, ["Jan 29 - Feb 4", "Feb 5-11", "Feb 12-18"]);
/// ```
pub fn weeks_for_date_range(start: NaiveDate, end: NaiveDate, ctx: &Context) -> Vec<WeekInfo> {
    if start > end {
        return Vec::new();
    }

    // The week containing `start` intersects the range, and so does any
    // following week starting before `end`.
    first_week_from(start)
        .into_iter()
        .flat_map(|first| WeekSteps::new(first, end, MAX_WEEKS_IN_RANGE, "weeks of a date range"))
        .map(|week| WeekInfo::new(week, ctx))
        .collect()
}

/// List the months the weeks of `[start, end]` are attributed to, in
/// chronological order.
///
/// ```
/// use chrono::NaiveDate;
/// use week_attribution::months_for_date_range;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let months = months_for_date_range(date(2024, 2, 1), date(2024, 2, 29));
///
/// // The week of February 1st started on January 29th
/// let months: Vec<_> = months.iter().map(ToString::to_string).collect();
/// assert_eq!(months, ["2024-01", "2024-02"]);
/// ```
pub fn months_for_date_range(start: NaiveDate, end: NaiveDate) -> Vec<MonthKey> {
    if start > end {
        return Vec::new();
    }

    let mut months: Vec<MonthKey> = Vec::new();
    let weeks = first_week_from(start).into_iter().flat_map(|first| {
        WeekSteps::new(first, end, MAX_WEEKS_IN_RANGE, "months of a date range")
    });

    for week in weeks {
        if months.last() != Some(&week.month()) {
            months.push(week.month());
        }
    }

    months
}
