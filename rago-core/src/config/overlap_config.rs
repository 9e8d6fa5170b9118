use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Duration of the preparatory work overlapped with an in-flight retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    /// Preparatory work in quality mode (ms).
    pub prep_ms: u64,
    /// Preparatory work in cheap mode (ms).
    pub cheap_prep_ms: u64,
}

impl OverlapConfig {
    pub fn prep_for(&self, cheap_mode: bool) -> Duration {
        Duration::from_millis(if cheap_mode {
            self.cheap_prep_ms
        } else {
            self.prep_ms
        })
    }
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            prep_ms: defaults::DEFAULT_PREP_MS,
            cheap_prep_ms: defaults::DEFAULT_CHEAP_PREP_MS,
        }
    }
}
