use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{Error, Result};
use crate::format::MONTH_KEY_SHAPE;

const EXPECTED_MONTH_KEY: &str = "a month formatted as YYYY-MM";

/// Years that can be written with 4 digits. Keys are never built outside of
/// this range, so that their string form always parses back.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 0..=9999;

/// Canonical identifier of a calendar month, written `YYYY-MM`.
///
/// Keys are ordered chronologically, which is also the lexicographic order of
/// their string representation.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// First supported month, `0000-01`.
    pub const MIN: Self = Self { year: 0, month: 1 };

    /// Last supported month, `9999-12`.
    pub const MAX: Self = Self { year: 9999, month: 12 };

    /// Build a key from a year in [`SUPPORTED_YEARS`] and a month number in
    /// `1..=12`.
    ///
    /// ```
    /// use calendar_keys::MonthKey;
    ///
    /// assert_eq!(MonthKey::new(2024, 2).unwrap().to_string(), "2024-02");
    /// assert!(MonthKey::new(2024, 13).is_none());
    /// assert!(MonthKey::new(10000, 1).is_none());
    /// ```
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !SUPPORTED_YEARS.contains(&year) || !(1..=12).contains(&month) {
            return None;
        }

        Some(Self { year, month })
    }

    /// The month containing a date, or `None` if its year can't be written
    /// with 4 digits.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("first of the month should always exist")
    }

    /// Count the days of this month.
    ///
    /// ```
    /// use calendar_keys::MonthKey;
    ///
    /// assert_eq!(MonthKey::new(2024, 2).unwrap().num_days(), 29);
    /// assert_eq!(MonthKey::new(2023, 2).unwrap().num_days(), 28);
    /// assert_eq!(MonthKey::new(2023, 12).unwrap().num_days(), 31);
    /// ```
    pub fn num_days(self) -> u32 {
        let first_this_month = self.first_day();

        let Some(first_next_month) = first_this_month.checked_add_months(Months::new(1)) else {
            // December of last supported year
            return 31;
        };

        (first_next_month - first_this_month)
            .num_days()
            .try_into()
            .expect("time not monotonic while comparing dates")
    }

    pub fn last_day(self) -> NaiveDate {
        self.first_day()
            .with_day(self.num_days())
            .expect("last day of the month should always exist")
    }

    /// Check if a date falls inside of this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month that follows.
    ///
    /// ```
    /// use calendar_keys::MonthKey;
    ///
    /// let dec: MonthKey = "2023-12".parse().unwrap();
    /// assert_eq!(dec.succ().unwrap().to_string(), "2024-01");
    /// assert_eq!(dec.succ().unwrap().pred(), Some(dec));
    /// ```
    pub fn succ(self) -> Option<Self> {
        if self.month == 12 {
            Self::new(self.year.checked_add(1)?, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// The month that precedes.
    pub fn pred(self) -> Option<Self> {
        if self.month == 1 {
            Self::new(self.year.checked_sub(1)?, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Debug for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MonthKey({self})")
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = parse_month_key(s)?;
        Self::new(year, month).ok_or_else(|| Error::invalid_key(s, EXPECTED_MONTH_KEY))
    }
}

/// Get the key of the month containing a date, which is written `YYYY-MM`.
///
/// ```
/// use calendar_keys::month_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(month_key(date).unwrap().to_string(), "2024-02");
///
/// let far = NaiveDate::from_ymd_opt(10000, 3, 1).unwrap();
/// assert_eq!(month_key(far), None);
/// ```
pub fn month_key(date: NaiveDate) -> Option<MonthKey> {
    MonthKey::from_date(date)
}

/// Read a raw `YYYY-MM` key into a pair `(year, month)`.
///
/// ```
/// use calendar_keys::parse_month_key;
///
/// assert_eq!(parse_month_key("2024-01").unwrap(), (2024, 1));
/// assert!(parse_month_key("2024-13").is_err());
/// assert!(parse_month_key("2024-1").is_err());
/// ```
pub fn parse_month_key(raw: &str) -> Result<(i32, u32)> {
    let invalid = || Error::invalid_key(raw, EXPECTED_MONTH_KEY);
    let caps = MONTH_KEY_SHAPE.captures(raw).ok_or_else(invalid)?;
    let year: i32 = caps["year"].parse().map_err(|_| invalid())?;
    let month: u32 = caps["month"].parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}
