//! Log output for the application shell
//!
//! Library code only emits `tracing` events; the shell calls [`init`] once
//! at startup to decide where they go.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber with [`DEFAULT_FILTER`].
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_with_filter(DEFAULT_FILTER)
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Fails when a global
/// subscriber is already installed or the filter does not parse.
pub fn init_with_filter(
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(default_filter, "Logging initialized");
    Ok(())
}
