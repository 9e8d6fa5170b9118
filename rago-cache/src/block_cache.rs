//! Block cache: document id → evidence text.
//!
//! Documents are static for the process lifetime, so cached text is never
//! invalidated; it only leaves through eviction.

use std::sync::Arc;

use rago_core::errors::ConfigError;
use rago_core::models::DocId;

use crate::shared::SharedLru;
use crate::stats::CacheStatsSnapshot;

#[derive(Debug)]
pub struct BlockCache {
    inner: SharedLru<DocId, Arc<str>>,
}

impl BlockCache {
    /// Create an empty block cache. A zero capacity is a configuration error.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: SharedLru::new("block", capacity)?,
        })
    }

    /// Cached text for `doc_id`, refreshing its recency on a hit.
    pub fn get(&self, doc_id: DocId) -> Option<Arc<str>> {
        self.inner.get(&doc_id)
    }

    /// Store the text for `doc_id`, evicting the least recently used block if full.
    pub fn put(&self, doc_id: DocId, text: Arc<str>) {
        self.inner.put(doc_id, text);
    }

    /// Whether `doc_id` is resident. Does not change recency.
    pub fn contains(&self, doc_id: DocId) -> bool {
        self.inner.contains(&doc_id)
    }

    /// Number of blocks currently in the cache.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the cache holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Maximum number of resident blocks.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Resident doc ids from most to least recently used.
    pub fn doc_ids(&self) -> Vec<DocId> {
        self.inner.keys()
    }

    /// Point-in-time copy of the hit/miss/eviction counters.
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.inner.stats()
    }
}
