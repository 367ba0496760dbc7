use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{Error, Result};
use crate::format::DATE_KEY_SHAPE;
use crate::month_key::{MonthKey, SUPPORTED_YEARS};

const EXPECTED_DATE_KEY: &str = "a date formatted as YYYY-MM-DD";
const EXPECTED_WEEK_KEY: &str = "a Monday formatted as YYYY-MM-DD";

/// Canonical identifier of a Monday to Sunday week, written as the date of
/// its Monday (`YYYY-MM-DD`).
///
/// A `WeekKey` can only hold a Monday of a year in
/// [`SUPPORTED_YEARS`](crate::month_key::SUPPORTED_YEARS).
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeekKey(NaiveDate);

impl WeekKey {
    /// Identify the week starting at given date, or `None` if it is not a
    /// Monday or if its year can't be written with 4 digits.
    ///
    /// ```
    /// use calendar_keys::WeekKey;
    /// use chrono::NaiveDate;
    ///
    /// let monday = NaiveDate::from_ymd_opt(2024, 1, 29).unwrap();
    /// let tuesday = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
    /// assert!(WeekKey::new(monday).is_some());
    /// assert!(WeekKey::new(tuesday).is_none());
    ///
    /// let far = NaiveDate::from_ymd_opt(10000, 1, 3).unwrap();
    /// assert!(WeekKey::new(far).is_none());
    /// ```
    pub fn new(monday: NaiveDate) -> Option<Self> {
        if monday.weekday() != Weekday::Mon || !SUPPORTED_YEARS.contains(&monday.year()) {
            return None;
        }

        Some(Self(monday))
    }

    pub fn monday(self) -> NaiveDate {
        self.0
    }

    pub fn sunday(self) -> NaiveDate {
        self.0
            .checked_add_days(Days::new(6))
            .expect("sunday of a 4-digit year week should always exist")
    }

    /// The month this week is attributed to: the one containing its Monday,
    /// even if most of its days fall in the following month.
    pub fn month(self) -> MonthKey {
        MonthKey::from_date(self.0).expect("week key out of supported years")
    }

    /// The week that follows, if it starts before year 10000.
    pub fn succ(self) -> Option<Self> {
        self.0.checked_add_days(Days::new(7)).and_then(Self::new)
    }

    /// The week that precedes, if it starts after year 0.
    pub fn pred(self) -> Option<Self> {
        self.0.checked_sub_days(Days::new(7)).and_then(Self::new)
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", week_key(self.0))
    }
}

impl fmt::Debug for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeekKey({self})")
    }
}

impl FromStr for WeekKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let date = parse_week_key(s)?;
        Self::new(date).ok_or_else(|| Error::invalid_key(s, EXPECTED_WEEK_KEY))
    }
}

/// Format a date as `YYYY-MM-DD`. The date is expected to be a Monday, this
/// is not checked.
///
/// ```
/// use calendar_keys::week_key;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// assert_eq!(week_key(monday), "2024-03-04");
/// ```
pub fn week_key(monday: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", monday.year(), monday.month(), monday.day())
}

/// Read a raw `YYYY-MM-DD` key into a date. Any real date is accepted, use
/// `str::parse::<WeekKey>` to also require a Monday.
///
/// ```
/// use calendar_keys::parse_week_key;
///
/// assert!(parse_week_key("2024-01-30").is_ok());
/// assert!(parse_week_key("2023-02-29").is_err());
/// assert!(parse_week_key("2024-1-30").is_err());
/// ```
pub fn parse_week_key(raw: &str) -> Result<NaiveDate> {
    let invalid = || Error::invalid_key(raw, EXPECTED_DATE_KEY);
    let caps = DATE_KEY_SHAPE.captures(raw).ok_or_else(invalid)?;
    let year: i32 = caps["year"].parse().map_err(|_| invalid())?;
    let month: u32 = caps["month"].parse().map_err(|_| invalid())?;
    let day: u32 = caps["day"].parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}
