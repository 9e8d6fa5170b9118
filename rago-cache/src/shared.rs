//! Mutex-guarded LRU shared across concurrent requests.
//!
//! A lookup refreshes recency, so reads take the same exclusive lock as writes.
//! Every `get`/`put` is atomic with respect to every other operation on the
//! same container; nothing spans more than one call.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rago_core::errors::ConfigError;
use tracing::trace;

use crate::lru::LruBox;
use crate::stats::{CacheStats, CacheStatsSnapshot};

pub struct SharedLru<K, V> {
    name: &'static str,
    inner: Mutex<LruBox<K, V>>,
    stats: CacheStats,
}

impl<K: Hash + Eq + Clone, V: Clone> SharedLru<K, V> {
    /// Create a named shared container. A zero capacity is a configuration error.
    pub fn new(name: &'static str, capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            name,
            inner: Mutex::new(LruBox::named(name, capacity)?),
            stats: CacheStats::new(),
        })
    }

    /// Clone out the value for `key`, refreshing its recency on a hit.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let found = self.lock().get(key).cloned();
        self.stats.record_lookup(found.is_some());
        found
    }

    /// Insert or replace `key`. Returns the entry evicted to make room, if any.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        let (existed, evicted) = {
            let mut guard = self.lock();
            let existed = guard.contains(&key);
            (existed, guard.put(key, value))
        };
        if existed {
            self.stats.record_update();
        } else {
            self.stats.record_insert();
        }
        if evicted.is_some() {
            self.stats.record_eviction();
            trace!(cache = self.name, "evicted least recently used entry");
        }
        evicted
    }

    /// Whether `key` is resident. Does not change recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().contains(key)
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Maximum number of resident entries.
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Resident keys from most to least recently used.
    pub fn keys(&self) -> Vec<K> {
        self.lock().keys().cloned().collect()
    }

    /// Name used in logs and configuration errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Point-in-time copy of the hit/miss/eviction counters.
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }

    // The container is consistent between operations, so a panic elsewhere
    // while the lock was held leaves nothing half-written.
    fn lock(&self) -> MutexGuard<'_, LruBox<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> std::fmt::Debug for SharedLru<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedLru")
            .field("name", &self.name)
            .field("stats", &self.stats)
            .finish()
    }
}
