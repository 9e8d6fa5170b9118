//! Retrieval cache: query text → ranked document ids.
//!
//! Entries are keyed by a blake3 fingerprint of the query text, so key memory
//! is fixed per entry regardless of query length. Identical text always maps to
//! the same key.

use std::sync::Arc;

use rago_core::constants::QUERY_FINGERPRINT_LEN;
use rago_core::errors::ConfigError;
use rago_core::models::DocId;
use tracing::debug;

use crate::shared::SharedLru;
use crate::stats::CacheStatsSnapshot;

/// Fixed-size fingerprint of a query string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey([u8; QUERY_FINGERPRINT_LEN]);

impl QueryKey {
    pub fn of(query: &str) -> Self {
        Self(*blake3::hash(query.as_bytes()).as_bytes())
    }

    pub fn to_hex(&self) -> String {
        blake3::Hash::from(self.0).to_hex().to_string()
    }
}

impl std::fmt::Debug for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The first 8 bytes are plenty to tell keys apart in logs.
        write!(f, "QueryKey({})", &self.to_hex()[..16])
    }
}

/// Shared LRU of retrieval results. Cheap to read: values are `Arc` slices.
#[derive(Debug)]
pub struct RetrievalCache {
    inner: SharedLru<QueryKey, Arc<[DocId]>>,
}

impl RetrievalCache {
    /// Create an empty retrieval cache. A zero capacity is a configuration error.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: SharedLru::new("retrieval", capacity)?,
        })
    }

    /// Cached doc ids for `query`, refreshing its recency on a hit.
    pub fn get(&self, query: &str) -> Option<Arc<[DocId]>> {
        let key = QueryKey::of(query);
        let hit = self.inner.get(&key);
        debug!(key = ?key, hit = hit.is_some(), "retrieval cache lookup");
        hit
    }

    /// Store the ranked doc ids for `query`.
    pub fn put(&self, query: &str, doc_ids: Arc<[DocId]>) {
        if let Some((evicted, _)) = self.inner.put(QueryKey::of(query), doc_ids) {
            debug!(evicted = ?evicted, "retrieval cache evicted entry");
        }
    }

    /// Whether `query` is resident. Does not change recency.
    pub fn contains(&self, query: &str) -> bool {
        self.inner.contains(&QueryKey::of(query))
    }

    /// Number of queries currently in the cache.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the cache holds no queries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Maximum number of resident queries.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Point-in-time copy of the hit/miss/eviction counters.
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.inner.stats()
    }
}
