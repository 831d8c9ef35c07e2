//! Diagnostic logging to stderr.
//!
//! Report output goes to stdout; log events from the rv crates go to stderr so the two
//! never mix. The level comes from `RV_LOG` when set, otherwise from `-v`/`-q`.

use std::{env, io, str::FromStr};

use tracing::Level;
use tracing_subscriber::{FmtSubscriber, filter::filter_fn, prelude::*};

/// Environment variable overriding the log level (`error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_ENV: &str = "RV_LOG";

/// Installs the global subscriber.
pub fn init(verbose: u8, quiet: bool) {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|value| Level::from_str(value.trim()).ok())
        .unwrap_or_else(|| level_for(verbose, quiet));

    let result = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .finish()
        .with(filter_fn(|metadata| metadata.target().starts_with("rv")))
        .try_init();

    if let Err(e) = result {
        eprintln!("warning: could not initialize logging: {e}");
    }
}

/// Maps command-line verbosity flags to a level.
fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for(0, false), Level::WARN);
        assert_eq!(level_for(1, false), Level::INFO);
        assert_eq!(level_for(2, false), Level::DEBUG);
        assert_eq!(level_for(7, false), Level::TRACE);
        assert_eq!(level_for(0, true), Level::ERROR);
    }
}
