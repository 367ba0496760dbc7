use chrono::{Local, NaiveDate};

/// All the context a query can depend on.
///
/// The current date is read once when the context is built and then shared
/// by every computation performed with it, so that a week boundary can't
/// shift in the middle of a query.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    today: NaiveDate,
}

impl Context {
    /// Create a context for a fixed date.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use week_attribution::Context;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();
    /// assert_eq!(Context::new(today).today(), today);
    /// ```
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Create a context from the local wall clock.
    pub fn now() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Replace the date considered as today.
    pub fn with_today(self, today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}
