use serde::{Deserialize, Serialize};

use super::defaults;

/// Request serving configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Worker threads used by batch serving.
    pub worker_threads: usize,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            worker_threads: defaults::DEFAULT_WORKER_THREADS,
        }
    }
}
