use serde::{Deserialize, Serialize};

use super::defaults;

/// Knob controller thresholds and outputs.
///
/// The controller compares the last observed phase latencies against fractions
/// of `p95_budget_ms`; every number it can emit is listed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Target end-to-end latency ceiling (ms).
    pub p95_budget_ms: f64,
    /// Generation is the bottleneck when it exceeds this fraction of the budget.
    pub generation_pressure_ratio: f64,
    /// Retrieval is the bottleneck when it exceeds this fraction of the budget.
    pub retrieval_pressure_ratio: f64,
    /// Retrieval depth in quality mode.
    pub top_k: usize,
    /// Retrieval depth in cheap mode.
    pub cheap_top_k: usize,
    /// Advisory backend batch size when retrieval is healthy.
    pub batch: usize,
    /// Advisory backend batch size under retrieval pressure.
    pub pressured_batch: usize,
    /// Number of recent requests averaged before thresholding. 1 = previous request only.
    pub smoothing_window: usize,
    /// Retrieval latency assumed before the first request completes (ms).
    pub warmup_retrieval_ms: f64,
    /// Generation latency assumed before the first request completes (ms).
    pub warmup_generation_ms: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            p95_budget_ms: defaults::DEFAULT_P95_BUDGET_MS,
            generation_pressure_ratio: defaults::DEFAULT_GENERATION_PRESSURE_RATIO,
            retrieval_pressure_ratio: defaults::DEFAULT_RETRIEVAL_PRESSURE_RATIO,
            top_k: defaults::DEFAULT_TOP_K,
            cheap_top_k: defaults::DEFAULT_CHEAP_TOP_K,
            batch: defaults::DEFAULT_BATCH,
            pressured_batch: defaults::DEFAULT_PRESSURED_BATCH,
            smoothing_window: defaults::DEFAULT_SMOOTHING_WINDOW,
            warmup_retrieval_ms: defaults::DEFAULT_WARMUP_RETRIEVAL_MS,
            warmup_generation_ms: defaults::DEFAULT_WARMUP_GENERATION_MS,
        }
    }
}
