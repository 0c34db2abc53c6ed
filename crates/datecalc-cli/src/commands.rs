use anyhow::{Context, Result};
use chrono::TimeZone;
use datecalc::{Calendar, DateInput, WeekOptions};
use serde_json::{json, Value};
use tracing::info;

use crate::cli::Command;

/// Digits-only arguments are epoch milliseconds; anything else is a date string.
fn date_arg(s: &str) -> DateInput {
    s.trim()
        .parse::<i64>()
        .map_or_else(|_| DateInput::from(s), DateInput::Millis)
}

pub fn run<Z: TimeZone>(calendar: &Calendar<Z>, command: &Command) -> Result<Value> {
    match command {
        Command::Fields { date } => {
            let date = date_arg(date);
            Ok(json!({
                "valid": calendar.normalize(&date).is_valid(),
                "day_of_year": calendar.day_of_year(&date),
                "month_of_year": calendar.month_of_year(&date),
                "day_of_month": calendar.day_of_month(&date),
                "week_of_year": calendar.week_of_year(&date),
                "week_of_month": calendar.week_of_month(&date),
            }))
        }
        Command::Week {
            date,
            first_day,
            contains_day,
        } => {
            let options = WeekOptions::from_indices(*first_day, *contains_day)?;
            Ok(json!({
                "week_of_year": calendar.week_of_year_with_options(date_arg(date), &options),
                "first_day_of_week": first_day,
                "first_week_contains_day": contains_day,
            }))
        }
        Command::Month { year, month } => Ok(json!({
            "first_weekday": datecalc::first_weekday_of_month(*year, *month),
            "last_weekday": datecalc::last_weekday_of_month(*year, *month),
            "days_in_month": datecalc::days_in_month(*year, *month),
        })),
        Command::Diff { start, end } => {
            let (start, end) = (date_arg(start), date_arg(end));
            let breakdown = calendar.time_diff(&start, &end);
            Ok(json!({
                "milliseconds": calendar.milliseconds_diff(&start, &end),
                "seconds": calendar.seconds_diff(&start, &end),
                "minutes": calendar.minutes_diff(&start, &end),
                "hours": calendar.hours_diff(&start, &end),
                "days": calendar.days_diff(&start, &end),
                "months": calendar.months_diff(&start, &end),
                "years": calendar.years_diff(&start, &end),
                "breakdown": breakdown,
                "human_readable": breakdown.map(|d| d.to_string()),
            }))
        }
        Command::Age { birth, at } => {
            let at = at.as_deref().map_or(DateInput::Now, date_arg);
            Ok(json!({ "age": calendar.age(date_arg(birth), at) }))
        }
        Command::InRange { value, bounds } => {
            let range: Vec<DateInput> = bounds.iter().map(|b| date_arg(b)).collect();
            info!(bounds = range.len(), "checking range membership");
            let in_range = calendar
                .is_in_range(date_arg(value), &range)
                .context("in-range needs a start and an end bound")?;
            Ok(json!({ "in_range": in_range }))
        }
    }
}
