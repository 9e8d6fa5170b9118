use std::sync::Arc;
use std::thread;

use rago_cache::{BlockCache, LruBox, RetrievalCache, SharedLru};

// ── Eviction correctness ──────────────────────────────────────────────────

#[test]
fn third_insert_evicts_first_key() {
    let mut lru = LruBox::new(2).unwrap();
    lru.put("A", 1);
    lru.put("B", 2);
    lru.put("C", 3);

    assert_eq!(lru.get("A"), None, "A should have been evicted");
    assert_eq!(lru.get("B"), Some(&2));
    assert_eq!(lru.get("C"), Some(&3));
}

// ── Recency refresh on read ───────────────────────────────────────────────

#[test]
fn read_refreshes_recency_before_eviction() {
    let mut lru = LruBox::new(2).unwrap();
    lru.put("A", 1);
    lru.put("B", 2);
    assert_eq!(lru.get("A"), Some(&1));
    lru.put("C", 3);

    assert!(!lru.contains("B"), "B was least recently used");
    assert!(lru.contains("A"));
    assert!(lru.contains("C"));
}

#[test]
fn update_refreshes_recency_before_eviction() {
    let mut lru = LruBox::new(2).unwrap();
    lru.put("A", 1);
    lru.put("B", 2);
    lru.put("A", 11);
    let evicted = lru.put("C", 3);

    assert_eq!(evicted, Some(("B", 2)));
    assert_eq!(lru.peek("A"), Some(&11));
}

#[test]
fn ties_break_by_insertion_order() {
    let mut lru = LruBox::new(3).unwrap();
    lru.put(1u64, "one");
    lru.put(2u64, "two");
    lru.put(3u64, "three");
    assert_eq!(lru.put(4, "four"), Some((1, "one")));
    assert_eq!(lru.put(5, "five"), Some((2, "two")));
    assert_eq!(lru.keys().copied().collect::<Vec<_>>(), vec![5, 4, 3]);
}

// ── Shared containers ─────────────────────────────────────────────────────

#[test]
fn shared_lru_counts_hits_misses_and_evictions() {
    let lru: SharedLru<u64, String> = SharedLru::new("test", 2).unwrap();
    lru.put(1, "a".into());
    lru.put(2, "b".into());
    lru.put(2, "bb".into());
    assert_eq!(lru.get(&1).as_deref(), Some("a"));
    assert_eq!(lru.get(&9), None);
    lru.put(3, "c".into());

    let stats = lru.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.inserts, 3);
    assert_eq!(stats.updates, 1);
    assert_eq!(stats.evictions, 1);
    assert_eq!(lru.keys(), vec![3, 1]);
}

#[test]
fn block_cache_reports_resident_ids_in_recency_order() {
    let cache = BlockCache::new(3).unwrap();
    for id in [10u64, 20, 30] {
        cache.put(id, Arc::from(format!("Doc#{id}")));
    }
    assert_eq!(cache.get(10).as_deref(), Some("Doc#10"));
    assert_eq!(cache.doc_ids(), vec![10, 30, 20]);
    cache.put(40, Arc::from("Doc#40"));
    assert!(!cache.contains(20));
    assert_eq!(cache.len(), 3);
}

#[test]
fn concurrent_access_never_exceeds_capacity() {
    let cache = Arc::new(BlockCache::new(64).unwrap());
    let mut handles = vec![];

    for t in 0..8u64 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..500u64 {
                let id = (t * 1_000 + i) % 200;
                if cache.get(id).is_none() {
                    cache.put(id, Arc::from(format!("Doc#{id}")));
                }
                assert!(cache.len() <= 64);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 64);
    let ids = cache.doc_ids();
    assert_eq!(ids.len(), 64);
    for id in ids {
        assert_eq!(cache.get(id).as_deref(), Some(format!("Doc#{id}").as_str()));
    }
    let stats = cache.stats();
    assert_eq!(stats.lookups(), 8 * 500 + 64);
}

#[test]
fn concurrent_retrieval_cache_agrees_on_values() {
    let cache = Arc::new(RetrievalCache::new(16).unwrap());
    let mut handles = vec![];

    for t in 0..4 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                let q = format!("query-{}", (i + t) % 10);
                let ids: Arc<[u64]> = Arc::from(vec![i as u64 % 10, 99]);
                match cache.get(&q) {
                    Some(hit) => assert_eq!(hit.len(), 2),
                    None => cache.put(&q, ids),
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(cache.len(), 10);
}
