// src/logging.rs

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` still applies; `log_level` is
/// added on top and falls back to INFO when it does not parse.
/// Logs go to stderr so stdout stays clean for `dump_tables`.
pub fn init(log_level: &str) {
    let filter = EnvFilter::from_default_env()
        .add_directive(log_level.parse().unwrap_or(Level::INFO.into()));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
