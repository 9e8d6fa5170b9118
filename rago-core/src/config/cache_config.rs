use serde::{Deserialize, Serialize};

use super::defaults;

/// Capacities of the two-level cache hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum resident entries in the retrieval cache (query → doc ids).
    pub retrieval_capacity: usize,
    /// Maximum resident entries in the block cache (doc id → evidence text).
    pub block_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            retrieval_capacity: defaults::DEFAULT_RETRIEVAL_CACHE_CAPACITY,
            block_capacity: defaults::DEFAULT_BLOCK_CACHE_CAPACITY,
        }
    }
}
