//! Point queries over raw week keys, as they are stored next to records.
//!
//! Functions returning a `Result` fail on any malformed key. The `validate_*`
//! predicates never fail and can be used as guards before calling them.

use chrono::NaiveDate;

use calendar_keys::{parse_week_key, Error, MonthKey, WeekKey};

use crate::week::{monday_of_week, sunday_of_week};

/// Get the month a week is attributed to, which is the month of its Monday.
///
/// A key that is not a Monday is read as the week containing this date. Fails
/// for the first two days of year 0000, which belong to a week of year -1.
///
/// ```
/// use week_attribution::month_for_week;
///
/// assert_eq!(month_for_week("2024-01-29").unwrap().to_string(), "2024-01");
/// assert!(month_for_week("2024-01-32").is_err());
/// assert!(month_for_week("0000-01-02").is_err());
/// ```
pub fn month_for_week(week_key: &str) -> Result<MonthKey, Error> {
    let date = parse_week_key(week_key)?;

    MonthKey::from_date(monday_of_week(date)).ok_or_else(|| Error::InvalidKeyFormat {
        value: week_key.to_string(),
        expected: "a week starting in a 4-digit year",
    })
}

/// Count the days of a week that are attributed to a month: a week
/// contributes all of its 7 days to the month of its Monday, and none to any
/// other month.
///
/// ```
/// use week_attribution::days_in_month_for_week;
///
/// let january = "2024-01".parse().unwrap();
/// let february = "2024-02".parse().unwrap();
/// assert_eq!(days_in_month_for_week("2024-01-29", january).unwrap(), 7);
/// assert_eq!(days_in_month_for_week("2024-01-29", february).unwrap(), 0);
/// ```
pub fn days_in_month_for_week(week_key: &str, month: MonthKey) -> Result<u8, Error> {
    if month_for_week(week_key)? == month {
        Ok(7)
    } else {
        Ok(0)
    }
}

/// Check if a date is one of the 7 days of a week.
pub fn is_date_in_week(date: NaiveDate, week_key: &str) -> Result<bool, Error> {
    let day = parse_week_key(week_key)?;
    Ok((monday_of_week(day)..=sunday_of_week(day)).contains(&date))
}

/// Check that a raw key is a well formed date that is a Monday.
///
/// ```
/// use week_attribution::validate_week_key;
///
/// assert!(validate_week_key("2024-01-29"));
/// assert!(!validate_week_key("2024-01-30"));
/// assert!(!validate_week_key("not a key"));
/// ```
pub fn validate_week_key(week_key: &str) -> bool {
    week_key.parse::<WeekKey>().is_ok()
}

/// Check that a raw week key is attributed to a raw month key. Malformed keys
/// are never attributed to anything.
///
/// Like [`month_for_week`], this accepts any day of the week as its key: pair
/// it with [`validate_week_key`] to also require a Monday.
///
/// ```
/// use week_attribution::{validate_week_key, validate_week_month};
///
/// assert!(validate_week_month("2024-01-29", "2024-01"));
/// assert!(validate_week_month("2024-02-01", "2024-01"));
/// assert!(!validate_week_key("2024-02-01"));
/// ```
pub fn validate_week_month(week_key: &str, month_key: &str) -> bool {
    let Ok(month) = month_key.parse::<MonthKey>() else {
        return false;
    };

    month_for_week(week_key).is_ok_and(|week_month| week_month == month)
}
