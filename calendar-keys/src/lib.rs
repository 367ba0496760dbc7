#![doc = include_str!("../README.md")]

pub mod error;
pub mod month_key;
pub mod week_key;

mod format;
#[cfg(feature = "serde")]
mod serialize;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use month_key::{month_key, parse_month_key, MonthKey, SUPPORTED_YEARS};
pub use week_key::{parse_week_key, week_key, WeekKey};
