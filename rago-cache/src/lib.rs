//! # rago-cache
//!
//! Two-level cache hierarchy for the serving core.
//!
//! ```text
//! RetrievalCache  query fingerprint → ranked doc ids   (L1, skips retrieval)
//! BlockCache      doc id → evidence text               (L2, skips document fetch)
//!        └── both are SharedLru<K, V> = Mutex<LruBox<K, V>> + CacheStats
//! ```

pub mod block_cache;
pub mod lru;
pub mod retrieval_cache;
pub mod shared;
pub mod stats;

pub use block_cache::BlockCache;
pub use lru::LruBox;
pub use retrieval_cache::{QueryKey, RetrievalCache};
pub use shared::SharedLru;
pub use stats::{CacheStats, CacheStatsSnapshot};
