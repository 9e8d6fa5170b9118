//! # rago-observability
//!
//! Structured tracing setup and event definitions, per-engine serving metrics
//! (cache hit rate, cheap-mode share, knob flips, latency percentiles), and a
//! bounded request log.

pub mod metrics;
pub mod request_log;
pub mod tracing_setup;

pub use metrics::ServingMetrics;
pub use request_log::{RequestLog, RequestLogEntry};
