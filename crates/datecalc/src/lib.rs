//! # datecalc
//!
//! Calendar arithmetic on the proleptic Gregorian calendar.
//!
//! Computes ages, elapsed time broken down into years through seconds with
//! correct borrowing between units, ISO 8601 week numbers, and month/week
//! positional queries. Every operation is a pure function of its inputs
//! and a [`Calendar`], which fixes the zone whose wall clock supplies the
//! calendar fields (and, optionally, what "now" means).
//!
//! Dates are passed as anything convertible into [`DateInput`]: strings
//! (`"2024-06-15"`, `"2024/06/15 08:30"`, RFC 3339), epoch milliseconds,
//! chrono values, or `None` for "now". Unreadable input never panics or
//! errors; it becomes [`Instant::Invalid`] and every numeric result built
//! on it is `None`.
//!
//! ```
//! use chrono::Utc;
//! use datecalc::{Calendar, TimeDiff};
//!
//! let cal = Calendar::new(Utc);
//! assert_eq!(cal.age("2000-06-15", "2024-06-15"), Some(24));
//! assert_eq!(cal.week_of_year("2024-01-01"), Some(1));
//! assert_eq!(
//!     cal.time_diff("2023-01-31", "2023-03-01"),
//!     Some(TimeDiff { months: 1, days: 1, ..TimeDiff::default() })
//! );
//! assert_eq!(cal.days_diff("2024-01-01", "not a date"), None);
//! ```
//!
//! The free functions ([`age`], [`time_diff`], [`week_of_year`], ...) are
//! shorthands that use [`Calendar::local`]: the host's zone and clock.
//!
//! ## Modules
//!
//! - [`calendar`] — [`Calendar`] context and date normalization
//! - [`input`] — [`DateInput`], the accepted date-like values
//! - [`instant`] — [`Instant`] and [`OrderedPair`]
//! - [`fields`] — day of year, day/month fields, month lengths and weekdays
//! - [`week`] — week of the year ([`WeekOptions`]) and week of the month
//! - [`diff`] — millisecond through year differences and [`TimeDiff`]
//! - [`order`] — sorted copies of value and date lists
//! - [`validate`] — age thresholds and range membership
//! - [`error`] — Error types

pub mod calendar;
pub mod diff;
pub mod error;
pub mod fields;
pub mod input;
pub mod instant;
pub mod order;
pub mod validate;
pub mod week;

pub use calendar::{normalize, to_timestamp, Calendar};
pub use diff::{
    age, days_diff, hours_diff, milliseconds_diff, minutes_diff, months_diff, seconds_diff,
    time_diff, years_diff, TimeDiff,
};
pub use error::CalcError;
pub use fields::{
    day_of_month, day_of_year, days_in_month, first_weekday_of_month, last_weekday_of_month,
    month_of_year,
};
pub use input::DateInput;
pub use instant::{Instant, OrderedPair};
pub use order::{ensure_date_order, ensure_order, ensure_order_by, ensure_timestamp_order};
pub use validate::{is_in_range, is_older_than, is_younger_than};
pub use week::{
    week_of_month, week_of_month_starting, week_of_year, week_of_year_with_options,
    weekday_from_sunday, WeekOptions,
};
