mod attribution;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! week {
    ( $week: expr ) => {{
        use calendar_keys::WeekKey;
        $week.parse::<WeekKey>().expect("invalid week literal")
    }};
}

#[macro_export]
macro_rules! month {
    ( $month: expr ) => {{
        use calendar_keys::MonthKey;
        $month.parse::<MonthKey>().expect("invalid month literal")
    }};
}

/// Build a context for given date literal.
#[macro_export]
macro_rules! ctx {
    ( $today: expr ) => {{
        $crate::Context::new($crate::date!($today))
    }};
}

/// Format the keys of a list of weeks.
fn keys<'a>(weeks: impl IntoIterator<Item = &'a crate::WeekInfo>) -> Vec<String> {
    weeks
        .into_iter()
        .map(|week| week.week_key().to_string())
        .collect()
}
