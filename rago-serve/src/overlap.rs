//! Overlapped retrieval.
//!
//! On a retrieval cache miss the backend call runs on a scoped thread while
//! the caller performs independent preparatory work; the caller then blocks on
//! the handle. Only the time spent blocked at the join counts as retrieval
//! latency. A hit short-circuits everything and reports zero.
//!
//! The scope guarantees the retrieval thread is joined before `resolve`
//! returns, so no work outlives the request. There is no deadline on the join.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rago_cache::RetrievalCache;
use rago_core::errors::{BackendError, RagoResult};
use rago_core::models::{DocId, TuneKnobs};
use rago_core::traits::IRetrievalBackend;
use rago_observability::tracing_setup::events;
use tracing::debug;

/// Document ids for a query and how they were obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub doc_ids: Arc<[DocId]>,
    /// Time blocked at the join point. Zero on a cache hit.
    pub retrieval_wait: Duration,
    pub cache_hit: bool,
}

pub struct OverlapScheduler<'a> {
    cache: &'a RetrievalCache,
    backend: &'a dyn IRetrievalBackend,
}

impl<'a> OverlapScheduler<'a> {
    pub fn new(cache: &'a RetrievalCache, backend: &'a dyn IRetrievalBackend) -> Self {
        Self { cache, backend }
    }

    /// Resolve `query` to ranked doc ids, running `prep` while retrieval is in flight.
    ///
    /// `prep` must not depend on the retrieval result or touch the caches.
    /// Misses are stored in the cache after the join; hits are not re-inserted.
    pub fn resolve<P>(&self, query: &str, knobs: &TuneKnobs, prep: P) -> RagoResult<Resolved>
    where
        P: FnOnce(),
    {
        if let Some(doc_ids) = self.cache.get(query) {
            events::retrieval_cache_hit(query, doc_ids.len());
            return Ok(Resolved {
                doc_ids,
                retrieval_wait: Duration::ZERO,
                cache_hit: true,
            });
        }

        let backend = self.backend;
        let (top_k, batch) = (knobs.top_k, knobs.batch);

        let (joined, retrieval_wait) = thread::scope(|scope| {
            let handle = scope.spawn(move || backend.retrieve(query, top_k, batch));
            prep();
            let join_started = Instant::now();
            let joined = handle.join();
            (joined, join_started.elapsed())
        });

        let raw = joined.map_err(|_| BackendError::RetrievalPanicked)??;
        let doc_ids: Arc<[DocId]> = normalize(raw, top_k).into();
        debug!(
            doc_count = doc_ids.len(),
            wait_us = retrieval_wait.as_micros() as u64,
            "retrieval joined"
        );
        self.cache.put(query, Arc::clone(&doc_ids));

        Ok(Resolved {
            doc_ids,
            retrieval_wait,
            cache_hit: false,
        })
    }

    /// [`resolve`](Self::resolve) with a fixed-duration pause as the preparatory work.
    pub fn resolve_with_pause(
        &self,
        query: &str,
        knobs: &TuneKnobs,
        pause: Duration,
    ) -> RagoResult<Resolved> {
        self.resolve(query, knobs, || thread::sleep(pause))
    }
}

/// Drop repeated ids (first occurrence wins) and cap the list at `top_k`.
fn normalize(raw: Vec<DocId>, top_k: usize) -> Vec<DocId> {
    let mut seen = HashSet::with_capacity(raw.len());
    raw.into_iter()
        .filter(|id| seen.insert(*id))
        .take(top_k)
        .collect()
}
