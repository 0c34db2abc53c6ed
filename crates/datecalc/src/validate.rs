//! Age thresholds and date-range membership.
//!
//! Comparisons against an unreadable date are false, never an error. The
//! one error here is a range that is not exactly a `[start, end]` pair,
//! which is rejected before any date is read.

use chrono::{Local, TimeZone};

use crate::calendar::Calendar;
use crate::error::CalcError;
use crate::input::DateInput;

impl<Z: TimeZone> Calendar<Z> {
    /// Whether someone born on `birth` is older than `age` years at `at`.
    pub fn is_older_than(
        &self,
        age: i64,
        birth: impl Into<DateInput>,
        at: impl Into<DateInput>,
    ) -> bool {
        self.age(birth, at).is_some_and(|years| years > age)
    }

    /// Whether someone born on `birth` is younger than `age` years at `at`.
    pub fn is_younger_than(
        &self,
        age: i64,
        birth: impl Into<DateInput>,
        at: impl Into<DateInput>,
    ) -> bool {
        self.age(birth, at).is_some_and(|years| years < age)
    }

    /// Whether `value` lies within `range`, bounds inclusive and in either order.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::MalformedRange`] unless `range` has exactly two elements.
    ///
    /// ```
    /// use chrono::Utc;
    /// use datecalc::{Calendar, DateInput};
    ///
    /// let cal = Calendar::new(Utc);
    /// let range = [DateInput::from("2024-12-31"), DateInput::from("2024-01-01")];
    /// assert!(cal.is_in_range("2024-06-15", &range).unwrap());
    /// assert!(cal.is_in_range("2024-06-15", &range[..1]).is_err());
    /// ```
    pub fn is_in_range(
        &self,
        value: impl Into<DateInput>,
        range: &[DateInput],
    ) -> Result<bool, CalcError> {
        let [low, high] = range else {
            return Err(CalcError::MalformedRange { len: range.len() });
        };
        let Some(value) = self.to_timestamp(value) else {
            return Ok(false);
        };
        Ok(self
            .ordered(low, high)
            .is_some_and(|pair| {
                (pair.start().timestamp_millis()..=pair.end().timestamp_millis()).contains(&value)
            }))
    }
}

// ── Local-time shorthands ───────────────────────────────────────────────────

/// [`Calendar::is_older_than`] in the host's local zone.
pub fn is_older_than(age: i64, birth: impl Into<DateInput>, at: impl Into<DateInput>) -> bool {
    Calendar::<Local>::local().is_older_than(age, birth, at)
}

/// [`Calendar::is_younger_than`] in the host's local zone.
pub fn is_younger_than(age: i64, birth: impl Into<DateInput>, at: impl Into<DateInput>) -> bool {
    Calendar::<Local>::local().is_younger_than(age, birth, at)
}

/// [`Calendar::is_in_range`] in the host's local zone.
///
/// # Errors
///
/// Returns [`CalcError::MalformedRange`] unless `range` has exactly two elements.
pub fn is_in_range(value: impl Into<DateInput>, range: &[DateInput]) -> Result<bool, CalcError> {
    Calendar::<Local>::local().is_in_range(value, range)
}
