//! Tracing setup: structured JSON logging and event helpers.

pub mod events;

use rago_core::config::ObservabilityConfig;
use rago_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber with structured JSON output.
///
/// Respects the `RAGO_LOG` environment variable for filtering and falls back
/// to `default_level` when it is unset or invalid. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing(default_level: &str) -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// Install the global subscriber with an explicit filter string (for tests or embedding hosts).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

/// [`init_tracing`] with the configured `log_level` as the fallback filter.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    init_tracing(&config.log_level)
}
