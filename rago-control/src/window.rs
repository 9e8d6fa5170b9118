//! Bounded moving average over recent phase latencies.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Retrieval and generation latency of one request (ms).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseLatencies {
    pub retrieval_ms: f64,
    pub generation_ms: f64,
}

/// Keeps the last `size` observations; older ones fall off the front.
#[derive(Debug, Clone)]
pub struct LatencyWindow {
    size: usize,
    samples: VecDeque<PhaseLatencies>,
}

impl LatencyWindow {
    /// `size` is clamped to at least 1.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            samples: VecDeque::with_capacity(size),
        }
    }

    pub fn record(&mut self, sample: PhaseLatencies) {
        if self.samples.len() == self.size {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Arithmetic mean of the retained samples; zeros when empty.
    pub fn mean(&self) -> PhaseLatencies {
        if self.samples.is_empty() {
            return PhaseLatencies::default();
        }
        let n = self.samples.len() as f64;
        let (r, g) = self
            .samples
            .iter()
            .fold((0.0, 0.0), |(r, g), s| (r + s.retrieval_ms, g + s.generation_ms));
        PhaseLatencies {
            retrieval_ms: r / n,
            generation_ms: g / n,
        }
    }

    pub fn latest(&self) -> PhaseLatencies {
        self.samples.back().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn size(&self) -> usize {
        self.size
    }
}
