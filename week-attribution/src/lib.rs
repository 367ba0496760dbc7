#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod attribution;
pub mod context;
pub mod membership;
pub mod range;
pub mod rollup;
pub mod week;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::attribution::{
    current_week, week_number_in_month, weeks_belonging_to_month, weeks_overlapping_month,
    AttributedWeeks, OverlappingWeeks,
};
pub use crate::context::Context;
pub use crate::membership::{
    days_in_month_for_week, is_date_in_week, month_for_week, validate_week_key,
    validate_week_month,
};
pub use crate::range::{months_for_date_range, weeks_for_date_range};
pub use crate::rollup::rollup_by_month;
pub use crate::week::{
    format_week_label, is_monday, monday_of_week, sunday_of_week, week_containing, WeekInfo,
};
pub use calendar_keys::{
    month_key, parse_month_key, parse_week_key, week_key, Error, MonthKey, WeekKey,
    SUPPORTED_YEARS,
};
