use tracing_subscriber::EnvFilter;

/// Library and binary targets whose events reach the terminal.
const CRATE_TARGETS: &[&str] = &["datecalc", "datecalc_cli"];

/// Install the stderr subscriber for `datecalc`.
///
/// JSON results go to stdout, so diagnostics such as unreadable date text
/// (logged at debug) never mix with them. Levels per `-v` count:
///
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` overrides the flag if set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
