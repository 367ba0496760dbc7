//! Resolve which weeks belong to a month.
//!
//! There are two different answers to this question and they must not be
//! mixed up:
//!
//!  - [`weeks_belonging_to_month`] applies the attribution rule: a week
//!    belongs to the month containing its Monday, and to no other. Each week
//!    of the calendar is returned for exactly one month, which makes it the
//!    only suitable listing to aggregate per-week values into monthly totals.
//!  - [`weeks_overlapping_month`] lists every week that has at least one day
//!    in the month. When the 1st is not a Monday, the first week it returns
//!    is attributed to the previous month. This listing is meant for week
//!    pickers and other displays.
//!
//! Both functions return distinct types, and only [`AttributedWeeks`]
//! exposes positional queries and monthly totals.

use std::ops::Deref;

use calendar_keys::{MonthKey, WeekKey};

use crate::context::Context;
use crate::week::{first_week_from, week_containing, WeekInfo, WeekSteps};

/// A month contains at most 5 Mondays and intersects at most 6 weeks.
const MAX_WEEKS_PER_MONTH: usize = 7;

macro_rules! impl_week_list {
    ( $type: ident ) => {
        impl $type {
            /// The month this list was computed for.
            pub fn month(&self) -> MonthKey {
                self.month
            }

            pub fn weeks(&self) -> &[WeekInfo] {
                &self.weeks
            }

            pub fn keys(&self) -> impl Iterator<Item = WeekKey> + '_ {
                self.weeks.iter().map(WeekInfo::week_key)
            }

            pub fn contains(&self, week: WeekKey) -> bool {
                self.keys().any(|key| key == week)
            }

            /// Only the weeks that started on or before the date of given
            /// context.
            pub fn started(&self, ctx: &Context) -> impl Iterator<Item = &WeekInfo> + '_ {
                let today = ctx.today();
                self.weeks.iter().filter(move |week| week.start() <= today)
            }

            pub fn into_weeks(self) -> Vec<WeekInfo> {
                self.weeks
            }
        }

        impl Deref for $type {
            type Target = [WeekInfo];

            fn deref(&self) -> &Self::Target {
                &self.weeks
            }
        }

        impl IntoIterator for $type {
            type Item = WeekInfo;
            type IntoIter = std::vec::IntoIter<WeekInfo>;

            fn into_iter(self) -> Self::IntoIter {
                self.weeks.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $type {
            type Item = &'a WeekInfo;
            type IntoIter = std::slice::Iter<'a, WeekInfo>;

            fn into_iter(self) -> Self::IntoIter {
                self.weeks.iter()
            }
        }
    };
}

// --
// -- AttributedWeeks
// --

/// The weeks whose Monday falls in a month, in chronological order.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct AttributedWeeks {
    month: MonthKey,
    weeks: Vec<WeekInfo>,
}

impl_week_list!(AttributedWeeks);

impl AttributedWeeks {
    /// 1-based position of a week in this month, or `None` if the week is
    /// attributed to another month.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use week_attribution::{weeks_belonging_to_month, Context};
    ///
    /// let ctx = Context::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    /// let january = weeks_belonging_to_month("2024-01".parse().unwrap(), &ctx);
    ///
    /// assert_eq!(january.position("2024-01-15".parse().unwrap()), Some(3));
    /// assert_eq!(january.position("2024-02-05".parse().unwrap()), None);
    /// ```
    pub fn position(&self, week: WeekKey) -> Option<u32> {
        let index = self.keys().position(|key| key == week)?;
        Some((index + 1) as u32)
    }
}

// --
// -- OverlappingWeeks
// --

/// The weeks that have at least one day in a month, in chronological order.
///
/// The first of these weeks may be attributed to the previous month: never
/// use this listing to compute monthly totals.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct OverlappingWeeks {
    month: MonthKey,
    weeks: Vec<WeekInfo>,
}

impl_week_list!(OverlappingWeeks);

impl OverlappingWeeks {
    /// The weeks of this listing that are attributed to another month.
    pub fn attributed_elsewhere(&self) -> impl Iterator<Item = &WeekInfo> + '_ {
        self.weeks
            .iter()
            .filter(|week| week.attributed_month() != self.month)
    }
}

// --
// -- Resolvers
// --

/// Keys of the weeks whose Monday falls in given month.
fn attributed_week_keys(month: MonthKey) -> impl Iterator<Item = WeekKey> {
    let first_day = month.first_day();

    let first_week = match week_containing(first_day) {
        // This week starts in the previous month and belongs to it
        Some(week) if week.monday() < first_day => week.succ(),
        Some(week) => Some(week),
        // The week of 0000-01-01 started in year -1
        None => first_week_from(first_day),
    };

    first_week
        .into_iter()
        .flat_map(move |first| {
            WeekSteps::new(
                first,
                month.last_day(),
                MAX_WEEKS_PER_MONTH,
                "weeks attributed to a month",
            )
        })
        .filter(move |week| week.month() == month)
}

/// List the weeks attributed to a month, that is the weeks starting on a
/// Monday of this month.
///
/// ```
/// use chrono::NaiveDate;
/// use week_attribution::{weeks_belonging_to_month, Context};
///
/// let ctx = Context::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// let weeks = weeks_belonging_to_month("2024-02".parse().unwrap(), &ctx);
/// let keys: Vec<_> = weeks.keys().map(|key| key.to_string()).collect();
/// assert_eq!(keys, ["2024-02-05", "2024-02-12", "2024-02-19", "2024-02-26"]);
/// ```
pub fn weeks_belonging_to_month(month: MonthKey, ctx: &Context) -> AttributedWeeks {
    let weeks = attributed_week_keys(month)
        .map(|week| WeekInfo::new(week, ctx))
        .collect();

    AttributedWeeks { month, weeks }
}

/// List the weeks having at least one day in a month. This includes the last
/// week of the previous month when it ends after the 1st.
///
/// This is a display helper, use [`weeks_belonging_to_month`] to attribute
/// weeks to months.
///
/// ```
/// use chrono::NaiveDate;
/// use week_attribution::{weeks_overlapping_month, Context};
///
/// let ctx = Context::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// let weeks = weeks_overlapping_month("2024-02".parse().unwrap(), &ctx);
/// assert_eq!(weeks.len(), 5);
/// assert_eq!(weeks[0].label(), "Jan 29 - Feb 4");
/// assert_eq!(weeks[0].attributed_month().to_string(), "2024-01");
/// ```
pub fn weeks_overlapping_month(month: MonthKey, ctx: &Context) -> OverlappingWeeks {
    let weeks = first_week_from(month.first_day())
        .into_iter()
        .flat_map(|first| {
            WeekSteps::new(
                first,
                month.last_day(),
                MAX_WEEKS_PER_MONTH,
                "weeks overlapping a month",
            )
        })
        .map(|week| WeekInfo::new(week, ctx))
        .collect();

    OverlappingWeeks { month, weeks }
}

/// 1-based position of a week among the weeks attributed to a month.
///
/// If the week is not attributed to this month, `1` is returned. Use
/// [`AttributedWeeks::position`] to detect this case instead.
pub fn week_number_in_month(week: WeekKey, month: MonthKey) -> u32 {
    if let Some(index) = attributed_week_keys(month).position(|key| key == week) {
        return (index + 1) as u32;
    }

    #[cfg(feature = "log")]
    log::warn!("Week {week} is not attributed to {month}, defaulting to week number 1");

    1
}

/// Describe the week containing the date of given context, if this date is
/// in a week that has a key.
pub fn current_week(ctx: &Context) -> Option<WeekInfo> {
    WeekInfo::containing(ctx.today(), ctx)
}
