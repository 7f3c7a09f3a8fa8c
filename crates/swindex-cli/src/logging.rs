//! Tracing subscriber setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for the requested verbosity
#[must_use]
pub const fn level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Install the global subscriber. Logs go to stderr so stdout only
/// carries the output path.
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(level(verbose)))
        .init();
}
