use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Phase timings of one served request, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    /// Time spent waiting at the retrieval join point. 0 on a cache hit.
    pub retrieval_ms: f64,
    pub context_ms: f64,
    pub gen_ms: f64,
    pub e2e_ms: f64,
    pub cache_hit: bool,
}

impl Timings {
    /// Convert a measured duration to fractional milliseconds.
    pub fn ms(d: Duration) -> f64 {
        d.as_secs_f64() * 1_000.0
    }
}
