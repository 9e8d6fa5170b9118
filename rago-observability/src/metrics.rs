//! Serving metrics: request counts, cache effectiveness, knob stability, latency percentiles.

use std::collections::VecDeque;

use rago_core::models::{Timings, TuneKnobs};
use serde::{Deserialize, Serialize};

/// Aggregated metrics for one serving engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServingMetrics {
    /// Requests that completed successfully.
    pub requests: u64,
    /// Requests that failed as a whole.
    pub failures: u64,
    /// Completed requests served from the retrieval cache.
    pub retrieval_cache_hits: u64,
    /// Documents dropped from contexts after a failed fetch.
    pub documents_skipped: u64,
    /// Completed requests that ran in cheap mode.
    pub cheap_mode_requests: u64,
    /// Times cheap mode changed between consecutive requests.
    pub knob_flips: u64,
    last_cheap_mode: Option<bool>,
    window: usize,
    e2e_ms: VecDeque<f64>,
}

impl ServingMetrics {
    /// Keep the last `window` end-to-end latencies for percentile queries.
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            requests: 0,
            failures: 0,
            retrieval_cache_hits: 0,
            documents_skipped: 0,
            cheap_mode_requests: 0,
            knob_flips: 0,
            last_cheap_mode: None,
            window,
            e2e_ms: VecDeque::with_capacity(window),
        }
    }

    /// Record a completed request.
    pub fn record_request(&mut self, knobs: &TuneKnobs, timings: &Timings, skipped_docs: usize) {
        self.requests += 1;
        if timings.cache_hit {
            self.retrieval_cache_hits += 1;
        }
        if knobs.cheap_mode {
            self.cheap_mode_requests += 1;
        }
        self.documents_skipped += skipped_docs as u64;

        if let Some(previous) = self.last_cheap_mode {
            if previous != knobs.cheap_mode {
                self.knob_flips += 1;
            }
        }
        self.last_cheap_mode = Some(knobs.cheap_mode);

        if self.e2e_ms.len() == self.window {
            self.e2e_ms.pop_front();
        }
        self.e2e_ms.push_back(timings.e2e_ms);
    }

    /// Record a request that failed before producing timings.
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Fraction of completed requests served from the retrieval cache.
    pub fn cache_hit_rate(&self) -> f64 {
        if self.requests == 0 {
            return 0.0;
        }
        self.retrieval_cache_hits as f64 / self.requests as f64
    }

    /// Nearest-rank 95th percentile of the retained end-to-end latencies.
    pub fn p95_ms(&self) -> f64 {
        self.percentile_ms(0.95)
    }

    /// Nearest-rank percentile (`q` in `(0, 1]`) of the retained latencies; 0.0 when empty.
    pub fn percentile_ms(&self, q: f64) -> f64 {
        if self.e2e_ms.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.e2e_ms.iter().copied().collect();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let rank = (q.clamp(0.0, 1.0) * sorted.len() as f64).ceil() as usize;
        sorted[rank.saturating_sub(1).min(sorted.len() - 1)]
    }

    pub fn mean_ms(&self) -> f64 {
        if self.e2e_ms.is_empty() {
            return 0.0;
        }
        self.e2e_ms.iter().sum::<f64>() / self.e2e_ms.len() as f64
    }
}

impl Default for ServingMetrics {
    fn default() -> Self {
        Self::new(rago_core::config::defaults::DEFAULT_LATENCY_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knobs(cheap: bool) -> TuneKnobs {
        TuneKnobs {
            top_k: if cheap { 6 } else { 10 },
            batch: 8,
            cheap_mode: cheap,
        }
    }

    fn timings(e2e: f64, hit: bool) -> Timings {
        Timings {
            e2e_ms: e2e,
            cache_hit: hit,
            ..Timings::default()
        }
    }

    #[test]
    fn counts_hits_and_cheap_requests() {
        let mut m = ServingMetrics::new(8);
        m.record_request(&knobs(false), &timings(30.0, false), 0);
        m.record_request(&knobs(true), &timings(20.0, true), 1);
        assert_eq!(m.requests, 2);
        assert_eq!(m.retrieval_cache_hits, 1);
        assert_eq!(m.cheap_mode_requests, 1);
        assert_eq!(m.documents_skipped, 1);
        assert_eq!(m.cache_hit_rate(), 0.5);
    }

    #[test]
    fn flips_count_mode_changes_only() {
        let mut m = ServingMetrics::new(8);
        for cheap in [false, false, true, true, false] {
            m.record_request(&knobs(cheap), &timings(1.0, false), 0);
        }
        assert_eq!(m.knob_flips, 2);
    }

    #[test]
    fn p95_uses_nearest_rank() {
        let mut m = ServingMetrics::new(100);
        for i in 1..=20 {
            m.record_request(&knobs(false), &timings(i as f64, false), 0);
        }
        assert_eq!(m.p95_ms(), 19.0);
        assert_eq!(m.percentile_ms(1.0), 20.0);
        assert_eq!(m.mean_ms(), 10.5);
    }

    #[test]
    fn window_forgets_old_latencies() {
        let mut m = ServingMetrics::new(2);
        m.record_request(&knobs(false), &timings(100.0, false), 0);
        m.record_request(&knobs(false), &timings(1.0, false), 0);
        m.record_request(&knobs(false), &timings(2.0, false), 0);
        assert_eq!(m.percentile_ms(1.0), 2.0);
        assert_eq!(m.requests, 3);
    }

    #[test]
    fn empty_metrics_report_zero() {
        let m = ServingMetrics::default();
        assert_eq!(m.p95_ms(), 0.0);
        assert_eq!(m.mean_ms(), 0.0);
        assert_eq!(m.cache_hit_rate(), 0.0);
    }
}
