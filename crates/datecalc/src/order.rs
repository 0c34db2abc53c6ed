//! Sorted copies of lists of values and dates.
//!
//! None of these functions reorder their input; they return a new `Vec`.
//! Date lists sort ascending by instant with unreadable dates last, and the
//! sort is stable.

use std::cmp::Ordering;

use chrono::{Local, TimeZone};

use crate::calendar::Calendar;
use crate::input::DateInput;
use crate::instant::Instant;

/// A sorted copy of `list`.
///
/// ```
/// assert_eq!(datecalc::ensure_order(&[3, 1, 2]), vec![1, 2, 3]);
/// ```
pub fn ensure_order<T: Ord + Clone>(list: &[T]) -> Vec<T> {
    let mut sorted = list.to_vec();
    sorted.sort();
    sorted
}

/// A copy of `list` sorted with `compare`.
pub fn ensure_order_by<T, F>(list: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = list.to_vec();
    sorted.sort_by(compare);
    sorted
}

/// Ascending, with `None` after every value.
fn valid_first(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl<Z: TimeZone> Calendar<Z> {
    /// Normalize every date and sort the instants ascending.
    pub fn ensure_date_order(&self, list: &[DateInput]) -> Vec<Instant<Z>> {
        let mut instants: Vec<Instant<Z>> = list.iter().map(|d| self.normalize(d)).collect();
        instants.sort_by(|a, b| valid_first(a.timestamp_millis(), b.timestamp_millis()));
        instants
    }

    /// Normalize every date to epoch milliseconds and sort ascending.
    pub fn ensure_timestamp_order(&self, list: &[DateInput]) -> Vec<Option<i64>> {
        let mut stamps: Vec<Option<i64>> = list.iter().map(|d| self.to_timestamp(d)).collect();
        stamps.sort_by(|a, b| valid_first(*a, *b));
        stamps
    }
}

// ── Local-time shorthands ───────────────────────────────────────────────────

/// [`Calendar::ensure_date_order`] in the host's local zone.
pub fn ensure_date_order(list: &[DateInput]) -> Vec<Instant<Local>> {
    Calendar::<Local>::local().ensure_date_order(list)
}

/// [`Calendar::ensure_timestamp_order`] in the host's local zone.
pub fn ensure_timestamp_order(list: &[DateInput]) -> Vec<Option<i64>> {
    Calendar::<Local>::local().ensure_timestamp_order(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn inputs(items: &[&str]) -> Vec<DateInput> {
        items.iter().map(|s| DateInput::from(*s)).collect()
    }

    #[test]
    fn test_ensure_order_leaves_input_alone() {
        let list = vec![3, 1, 2];
        let sorted = ensure_order(&list);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(list, vec![3, 1, 2]);
    }

    #[test]
    fn test_ensure_order_by_descending() {
        let sorted = ensure_order_by(&["b", "c", "a"], |a, b| b.cmp(a));
        assert_eq!(sorted, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_ensure_date_order() {
        let cal = Calendar::new(Utc);
        let sorted = cal.ensure_date_order(&inputs(&["2024-01-01", "2023-12-31", "2024-06-15"]));
        let days: Vec<Option<u32>> = sorted.iter().map(Instant::day).collect();
        assert_eq!(days, vec![Some(31), Some(1), Some(15)]);
    }

    #[test]
    fn test_ensure_date_order_puts_invalid_last() {
        let cal = Calendar::new(Utc);
        let sorted = cal.ensure_date_order(&inputs(&["bogus", "2024-01-02", "2024-01-01"]));
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted[0].day(), Some(1));
        assert_eq!(sorted[1].day(), Some(2));
        assert!(!sorted[2].is_valid());
    }

    #[test]
    fn test_ensure_timestamp_order() {
        let cal = Calendar::new(Utc);
        let list = vec![
            DateInput::Millis(86_400_000),
            DateInput::Invalid,
            DateInput::from("1970-01-01"),
        ];
        assert_eq!(
            cal.ensure_timestamp_order(&list),
            vec![Some(0), Some(86_400_000), None]
        );
    }
}
