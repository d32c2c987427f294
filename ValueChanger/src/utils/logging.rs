//! Diagnostic logging setup
//!
//! The console belongs to the menu, so logging is off unless requested with
//! `VALUE_CHANGER_LOG` (same syntax as `RUST_LOG`, e.g. `debug` or
//! `value_changer=trace`). Output goes to stderr without ANSI colors.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "VALUE_CHANGER_LOG";

const DEFAULT_FILTER: &str = "off";

/// Build the filter from [`LOG_ENV`], falling back to logging nothing
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok();
}
