use chrono::{Datelike, Days, NaiveDate, Weekday};

use calendar_keys::{MonthKey, WeekKey};

use crate::context::Context;

// --
// -- Week boundaries
// --

/// Get the Monday on or before given date.
///
/// ```
/// use chrono::NaiveDate;
/// use week_attribution::monday_of_week;
///
/// let sunday = NaiveDate::from_ymd_opt(2024, 2, 4).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 29).unwrap();
/// assert_eq!(monday_of_week(sunday), monday);
/// assert_eq!(monday_of_week(monday), monday);
/// ```
///
/// # Panics
///
/// If the Monday is before [`NaiveDate::MIN`], which can only happen for the
/// first 6 days supported by `chrono`. Dates of 4-digit years never panic.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    // Sunday closes the week, it is not the first day of the next one.
    let offset = match date.weekday().num_days_from_sunday() {
        0 => 6,
        day => day - 1,
    };

    date.checked_sub_days(Days::new(offset.into()))
        .expect("monday of the week exceeds supported dates")
}

/// Get the Sunday on or after given date.
///
/// # Panics
///
/// If the Sunday is after [`NaiveDate::MAX`] or the Monday is before
/// [`NaiveDate::MIN`]. Dates of 4-digit years never panic.
pub fn sunday_of_week(date: NaiveDate) -> NaiveDate {
    monday_of_week(date)
        .checked_add_days(Days::new(6))
        .expect("sunday of the week exceeds supported dates")
}

pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// Get the key of the week containing given date, or `None` if this week
/// starts outside of [`SUPPORTED_YEARS`](calendar_keys::SUPPORTED_YEARS).
///
/// ```
/// use chrono::NaiveDate;
/// use week_attribution::week_containing;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// assert_eq!(week_containing(date(2024, 2, 1)).unwrap().to_string(), "2024-01-29");
/// assert_eq!(week_containing(date(10000, 1, 2)).unwrap().to_string(), "9999-12-27");
/// assert_eq!(week_containing(date(0, 1, 1)), None);
/// ```
pub fn week_containing(date: NaiveDate) -> Option<WeekKey> {
    // Also keeps monday_of_week away from NaiveDate::MIN
    if date < MonthKey::MIN.first_day() {
        return None;
    }

    WeekKey::new(monday_of_week(date))
}

/// Get the first week having a key and at least one day on or after given
/// date.
pub(crate) fn first_week_from(date: NaiveDate) -> Option<WeekKey> {
    let date = date.max(MonthKey::MIN.first_day());

    week_containing(date).or_else(|| {
        let next_week = date.checked_add_days(Days::new(7))?;
        week_containing(next_week)
    })
}

/// Build a short human label for a week, for example `"Mar 4-10"` or
/// `"Jan 29 - Feb 4"` when the week spans over two months.
///
/// ```
/// use chrono::NaiveDate;
/// use week_attribution::format_week_label;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// assert_eq!(format_week_label(date(2024, 3, 4), date(2024, 3, 10)), "Mar 4-10");
/// assert_eq!(format_week_label(date(2024, 1, 29), date(2024, 2, 4)), "Jan 29 - Feb 4");
/// ```
pub fn format_week_label(monday: NaiveDate, sunday: NaiveDate) -> String {
    if (monday.year(), monday.month()) == (sunday.year(), sunday.month()) {
        format!("{}-{}", monday.format("%b %-d"), sunday.day())
    } else {
        format!("{} - {}", monday.format("%b %-d"), sunday.format("%b %-d"))
    }
}

// --
// -- WeekInfo
// --

/// Description of a week, computed from its key.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct WeekInfo {
    week_key: WeekKey,
    start: NaiveDate,
    end: NaiveDate,
    label: String,
    month_keys: Vec<MonthKey>,
    is_complete: bool,
}

impl WeekInfo {
    /// Describe a week as seen from the date of given context.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use week_attribution::{Context, WeekInfo, WeekKey};
    ///
    /// let ctx = Context::new(NaiveDate::from_ymd_opt(2024, 2, 7).unwrap());
    /// let week: WeekKey = "2024-01-29".parse().unwrap();
    /// let info = WeekInfo::new(week, &ctx);
    ///
    /// assert_eq!(info.label(), "Jan 29 - Feb 4");
    /// assert_eq!(info.month_keys().len(), 2);
    /// assert_eq!(info.attributed_month().to_string(), "2024-01");
    /// assert!(info.is_complete());
    /// ```
    pub fn new(week_key: WeekKey, ctx: &Context) -> Self {
        let start = week_key.monday();
        let end = week_key.sunday();
        let start_month = week_key.month();
        let mut month_keys = vec![start_month];

        // The last week of 9999 ends in a month that has no key
        if let Some(end_month) = MonthKey::from_date(end).filter(|month| *month != start_month) {
            month_keys.push(end_month);
        }

        Self {
            week_key,
            start,
            end,
            label: format_week_label(start, end),
            month_keys,
            is_complete: end < ctx.today(),
        }
    }

    /// Describe the week containing given date, see [`week_containing`].
    pub fn containing(date: NaiveDate, ctx: &Context) -> Option<Self> {
        Some(Self::new(week_containing(date)?, ctx))
    }

    pub fn week_key(&self) -> WeekKey {
        self.week_key
    }

    /// The Monday of this week.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The Sunday of this week.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Every month touched by any of the 7 days of this week, in
    /// chronological order. This is meant for display: a week is only ever
    /// attributed to [`WeekInfo::attributed_month`].
    pub fn month_keys(&self) -> &[MonthKey] {
        &self.month_keys
    }

    /// The month this week belongs to: the month of its Monday.
    pub fn attributed_month(&self) -> MonthKey {
        self.week_key.month()
    }

    /// The whole week is in the past of the context it was built with.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// The week has at least one day that is not in the future.
    pub fn has_started(&self, ctx: &Context) -> bool {
        self.start <= ctx.today()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }
}

// --
// -- Iteration
// --

/// Consecutive weeks from a first one until their Monday gets past a given
/// date. At most `cap` weeks are yielded.
#[derive(Clone, Debug)]
pub(crate) struct WeekSteps {
    next: Option<WeekKey>,
    until: NaiveDate,
    remaining: usize,
    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    purpose: &'static str,
}

impl WeekSteps {
    pub(crate) fn new(first: WeekKey, until: NaiveDate, cap: usize, purpose: &'static str) -> Self {
        Self { next: Some(first), until, remaining: cap, purpose }
    }
}

impl Iterator for WeekSteps {
    type Item = WeekKey;

    fn next(&mut self) -> Option<Self::Item> {
        let week = self.next.filter(|week| week.monday() <= self.until)?;

        if self.remaining == 0 {
            #[cfg(feature = "log")]
            log::warn!(
                "Stopped listing {} at week {week}: iteration cap reached before {}",
                self.purpose,
                self.until,
            );

            self.next = None;
            return None;
        }

        self.remaining -= 1;
        self.next = week.succ();
        Some(week)
    }
}
