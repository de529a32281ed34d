//! Diagnostic output for the `sommelier` binary.
//!
//! The libraries log through the `log` facade; the binary installs a
//! `tracing-subscriber` backend that forwards those records to stderr, so
//! JSON on stdout stays clean. `SOMMELIER_LOG` takes the usual filter
//! directives, e.g. `sommelier_recommender=debug`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "SOMMELIER_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Build a filter from raw directives, falling back to warnings only when
/// they are absent or malformed.
pub(crate) fn log_filter(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the stderr logger. Call once, before [`crate::run`].
///
/// # Panics
/// Panics if a global logger or subscriber is already installed.
pub fn init_logging() {
    let raw = std::env::var(LOG_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(raw.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
