//! Date-like inputs accepted by every datecalc operation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Anything that can be turned into an [`Instant`](crate::Instant) by
/// [`Calendar::normalize`](crate::Calendar::normalize).
///
/// Most callers never name this type: every operation takes
/// `impl Into<DateInput>`, so strings, epoch milliseconds and chrono values
/// can be passed directly.
///
/// ```
/// use datecalc::DateInput;
///
/// assert_eq!(DateInput::from("2024-06-15"), DateInput::Text("2024-06-15".into()));
/// assert_eq!(DateInput::from(0_i64), DateInput::Millis(0));
/// assert_eq!(DateInput::from(None::<&str>), DateInput::Now);
/// assert_eq!(DateInput::from(f64::NAN), DateInput::Invalid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// An absolute point in time.
    Instant(DateTime<Utc>),
    /// A wall-clock reading, interpreted in the calendar's zone.
    Civil(NaiveDateTime),
    /// A date string such as `2024-06-15`, `2024/06/15 08:30` or RFC 3339.
    Text(String),
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// The current time (the calendar's anchor, if one is pinned).
    Now,
    /// A value known to be unrepresentable. Normalizes to an invalid instant.
    Invalid,
}

impl Default for DateInput {
    fn default() -> Self {
        Self::Now
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for DateInput {
    fn from(dt: DateTime<Z>) -> Self {
        Self::Instant(dt.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Civil(naive)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Civil(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for DateInput {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        Self::Millis(millis)
    }
}

/// Fractional milliseconds truncate toward zero; NaN and infinities are invalid.
impl From<f64> for DateInput {
    fn from(millis: f64) -> Self {
        if millis.is_finite() {
            Self::Millis(millis.trunc() as i64)
        } else {
            Self::Invalid
        }
    }
}

impl From<&DateInput> for DateInput {
    fn from(input: &DateInput) -> Self {
        input.clone()
    }
}

/// `None` is an absent date, which means "now".
impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(input: Option<T>) -> Self {
        input.map_or(Self::Now, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_from_offset_datetime_keeps_the_instant() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(DateInput::from(dt), DateInput::Instant(expected));
    }

    #[test]
    fn test_from_naive_date_is_civil_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let expected = date.and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(DateInput::from(date), DateInput::Civil(expected));
    }

    #[test]
    fn test_from_f64_truncates_toward_zero() {
        assert_eq!(DateInput::from(1.9_f64), DateInput::Millis(1));
        assert_eq!(DateInput::from(-1.9_f64), DateInput::Millis(-1));
    }

    #[test]
    fn test_from_non_finite_f64_is_invalid() {
        assert_eq!(DateInput::from(f64::INFINITY), DateInput::Invalid);
        assert_eq!(DateInput::from(f64::NEG_INFINITY), DateInput::Invalid);
    }

    #[test]
    fn test_absent_means_now() {
        assert_eq!(DateInput::from(None::<i64>), DateInput::Now);
        assert_eq!(DateInput::from(Some(5_i64)), DateInput::Millis(5));
        assert_eq!(DateInput::default(), DateInput::Now);
    }
}
