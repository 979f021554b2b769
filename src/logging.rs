//! Process-wide `tracing` subscriber setup.
//!
//! The library only emits events; installing a subscriber is left to the
//! host. [`init`] installs the same format the `newsapi` binary uses:
//! RFC 3339 UTC timestamps, level, target, and an `EnvFilter` read from
//! `RUST_LOG` that falls back to `default_filter`.

use tracing_subscriber::{EnvFilter, fmt as tfmt};

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
