use serde::{Deserialize, Serialize};

use super::defaults;

/// Observability subsystem configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Maximum entries retained by the request log.
    pub request_log_capacity: usize,
    /// Number of recent end-to-end latencies kept for percentile reporting.
    pub latency_window: usize,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            request_log_capacity: defaults::DEFAULT_REQUEST_LOG_CAPACITY,
            latency_window: defaults::DEFAULT_LATENCY_WINDOW,
        }
    }
}
