mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone, Utc};
use clap::Parser;
use datecalc::Calendar;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let anchor = cli
        .now
        .as_deref()
        .map(parse_anchor)
        .transpose()?;

    let output = match cli.tz.as_deref() {
        Some(name) => {
            let calendar = Calendar::from_iana(name)?;
            commands::run(&anchored(calendar, anchor), &cli.command)?
        }
        None => commands::run(&anchored(Calendar::<Local>::local(), anchor), &cli.command)?,
    };

    let json = serde_json::to_string_pretty(&output).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn parse_anchor(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("--now must be an RFC 3339 datetime, got '{s}'"))
}

fn anchored<Z: TimeZone>(calendar: Calendar<Z>, anchor: Option<DateTime<Utc>>) -> Calendar<Z> {
    match anchor {
        Some(now) => calendar.with_anchor(now),
        None => calendar,
    }
}
