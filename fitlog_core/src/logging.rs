//! Diagnostic logging for the tracker.
//!
//! Prompts and entry listings own stdout, so every log line is written to
//! stderr. `RUST_LOG` always wins over the level picked here.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber; `verbose` lowers the floor from warn to debug
pub fn init(verbose: bool) {
    init_with_level(if verbose { "debug" } else { "warn" })
}

/// Install the global subscriber with `default_level` unless `RUST_LOG` is set
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route debug logs into the test harness; safe to call from every test
#[cfg(test)]
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
