//! Shared fuzzing logic between unit tests and the actual fuzz target.

use std::fmt::Debug;

use arbitrary::Arbitrary;
use chrono::{Datelike, Days, Duration, NaiveDate};

use calendar_keys::{MonthKey, WeekKey, SUPPORTED_YEARS};

use crate::attribution::{week_number_in_month, weeks_belonging_to_month, weeks_overlapping_month};
use crate::context::Context;
use crate::membership::{days_in_month_for_week, month_for_week, validate_week_key};
use crate::range::weeks_for_date_range;
use crate::week::{is_monday, monday_of_week, sunday_of_week, week_containing, WeekInfo};

/// A fuzzing example
#[derive(Arbitrary, Clone)]
pub struct Data {
    pub date_days: i32,
    pub span_days: u16,
    pub today_days: i32,
}

impl Data {
    fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_num_days_from_ce_opt(self.date_days)
    }

    fn today(&self) -> Option<NaiveDate> {
        NaiveDate::from_num_days_from_ce_opt(self.today_days)
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Data");

        if let Some(date) = self.date() {
            debug.field("date", &date);
        }

        if let Some(today) = self.today() {
            debug.field("today", &today);
        }

        debug.field("span_days", &self.span_days);
        debug.finish()
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// the corpus.
pub fn run_fuzz_weeks(data: Data) -> bool {
    let (Some(date), Some(today)) = (data.date(), data.today()) else {
        return false;
    };

    // Weeks cut by the limits of chrono have no Monday or no Sunday.
    if date.checked_sub_days(Days::new(6)).is_none() || date.checked_add_days(Days::new(6)).is_none() {
        return false;
    }

    let ctx = Context::new(today);

    // Week boundaries
    let monday = monday_of_week(date);
    let sunday = sunday_of_week(date);
    assert!(is_monday(monday));
    assert!(monday <= date && date <= sunday);
    assert_eq!(monday_of_week(monday), monday);
    assert_eq!(sunday - monday, Duration::days(6));

    // Keys only exist for 4-digit years
    let week = week_containing(date);
    assert_eq!(week.is_some(), SUPPORTED_YEARS.contains(&monday.year()));
    let month = MonthKey::from_date(date);
    assert_eq!(month.is_some(), SUPPORTED_YEARS.contains(&date.year()));

    if let Some(month) = month {
        assert_eq!(month.to_string().parse::<MonthKey>(), Ok(month));
    }

    if let Some(week) = week {
        check_attribution(week, month, &ctx);
    }

    // Ranges
    let Some(end) = date.checked_add_days(Days::new(data.span_days.into())) else {
        return true;
    };

    let weeks = weeks_for_date_range(date, end, &ctx);
    assert!(weeks.len() <= 100);

    if let Some(week) = week {
        assert_eq!(weeks.first().map(WeekInfo::week_key), Some(week));
    }

    for pair in weeks.windows(2) {
        assert_eq!(pair[0].week_key().succ(), Some(pair[1].week_key()));
    }

    for info in &weeks {
        assert!(info.start() <= end && info.end() >= date);
        assert_eq!(info.is_complete(), info.end() < today);
    }

    true
}

fn check_attribution(week: WeekKey, month: Option<MonthKey>, ctx: &Context) {
    let raw_week = week.to_string();
    assert!(validate_week_key(&raw_week));
    assert_eq!(raw_week.parse::<WeekKey>(), Ok(week));

    let week_month = month_for_week(&raw_week).expect("generated an invalid week key");
    assert_eq!(week_month, week.month());
    assert_eq!(days_in_month_for_week(&raw_week, week_month), Ok(7));

    let attributed = weeks_belonging_to_month(week_month, ctx);
    let position = attributed.position(week).expect("week missing from its month");
    assert_eq!(week_number_in_month(week, week_month), position);

    if let Some(month) = month {
        assert!(weeks_overlapping_month(month, ctx).contains(week));
    }

    for other in [week_month.pred(), week_month.succ()].into_iter().flatten() {
        assert!(!weeks_belonging_to_month(other, ctx).contains(week));
        assert_eq!(days_in_month_for_week(&raw_week, other), Ok(0));
    }
}
