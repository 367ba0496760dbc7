//! Shapes of raw keys, checked before their values are read.

use std::sync::LazyLock;

use regex::Regex;

/// `YYYY-MM`, with ASCII digits only.
pub(crate) static MONTH_KEY_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})$").expect("invalid month key pattern")
});

/// `YYYY-MM-DD`, with ASCII digits only.
pub(crate) static DATE_KEY_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})$")
        .expect("invalid date key pattern")
});
