use clap::{Parser, Subcommand};

/// Calendar arithmetic: ages, date differences and week numbers.
///
/// Dates are `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]`, RFC 3339 or epoch
/// milliseconds. Results are printed as JSON; an unreadable date gives
/// `null` fields.
#[derive(Parser)]
#[command(name = "datecalc", version, about = "Calendar arithmetic as JSON")]
pub struct Cli {
    /// IANA timezone whose wall clock supplies calendar fields (default: host zone).
    #[arg(long, global = true)]
    pub tz: Option<String>,

    /// Fix "now" to an RFC 3339 instant instead of the system clock.
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Day of year, month, day of month and week numbers of a date.
    Fields {
        /// The date to inspect, as text or epoch milliseconds.
        #[arg(allow_negative_numbers = true)]
        date: String,
    },
    /// Week of the year under a custom week convention.
    Week {
        /// The date to inspect, as text or epoch milliseconds.
        #[arg(allow_negative_numbers = true)]
        date: String,

        /// First day of the week, 0 (Sunday) to 6 (Saturday).
        #[arg(long, default_value_t = 1)]
        first_day: u32,

        /// Week 1 is the week containing this day of January (1-7).
        #[arg(long, default_value_t = 4)]
        contains_day: u32,
    },
    /// First/last weekday and length of a month.
    Month {
        year: i32,
        /// Month number, 1-12.
        #[arg(allow_negative_numbers = true)]
        month: i32,
    },
    /// Differences between two dates, in either order.
    Diff {
        #[arg(allow_negative_numbers = true)]
        start: String,
        #[arg(allow_negative_numbers = true)]
        end: String,
    },
    /// Age in completed years.
    Age {
        /// Date of birth.
        #[arg(allow_negative_numbers = true)]
        birth: String,

        /// Date to compute the age at (default: now).
        #[arg(long, allow_negative_numbers = true)]
        at: Option<String>,
    },
    /// Whether a date lies within [start, end] (bounds in either order).
    InRange {
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Exactly two bounds.
        #[arg(allow_negative_numbers = true)]
        bounds: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_millis_are_positional_values() {
        let cli = Cli::try_parse_from(["datecalc", "diff", "-1000", "0"]).unwrap();
        match cli.command {
            Command::Diff { start, end } => {
                assert_eq!(start, "-1000");
                assert_eq!(end, "0");
            }
            _ => panic!("expected diff"),
        }
    }

    #[test]
    fn test_negative_millis_for_age_at() {
        let cli = Cli::try_parse_from(["datecalc", "age", "-5000", "--at", "-1000"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Age { ref birth, at: Some(ref at) } if birth == "-5000" && at == "-1000"
        ));
    }
}
