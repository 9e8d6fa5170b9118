//! Fake collaborators with deterministic output and controllable latency.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rago_core::errors::{BackendError, RagoResult};
use rago_core::models::DocId;
use rago_core::traits::{IDocumentStore, IGenerationBackend, IRetrievalBackend};

/// Largest doc id produced by [`SeededRetrieval`].
pub const CORPUS_MAX_DOC_ID: DocId = 200_000;

/// Retrieval whose ranking is a pure function of the query text.
///
/// Ids are drawn from a blake3 XOF stream seeded with the query, so the same
/// question always ranks the same documents.
#[derive(Debug)]
pub struct SeededRetrieval {
    latency: Duration,
    calls: AtomicUsize,
}

impl SeededRetrieval {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            calls: AtomicUsize::new(0),
        }
    }

    /// No simulated latency.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The ranking `retrieve` returns for `query`, without side effects.
    pub fn ranking(query: &str, top_k: usize) -> Vec<DocId> {
        let mut stream = blake3::Hasher::new()
            .update(query.as_bytes())
            .finalize_xof();
        let mut ids = Vec::with_capacity(top_k);
        let mut buf = [0u8; 8];
        for _ in 0..top_k {
            stream.fill(&mut buf);
            ids.push(u64::from_le_bytes(buf) % (CORPUS_MAX_DOC_ID + 1));
        }
        ids
    }
}

impl IRetrievalBackend for SeededRetrieval {
    fn retrieve(&self, query: &str, top_k: usize, _batch_hint: usize) -> RagoResult<Vec<DocId>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        Ok(Self::ranking(query, top_k))
    }
}

/// Retrieval returning canned rankings per query (empty for unknown queries).
#[derive(Debug, Default)]
pub struct ScriptedRetrieval {
    rankings: HashMap<String, Vec<DocId>>,
    latency: Duration,
    calls: AtomicUsize,
    last_batch_hint: AtomicUsize,
}

impl ScriptedRetrieval {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ranking(mut self, query: &str, ids: Vec<DocId>) -> Self {
        self.rankings.insert(query.to_string(), ids);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_batch_hint(&self) -> usize {
        self.last_batch_hint.load(Ordering::SeqCst)
    }
}

impl IRetrievalBackend for ScriptedRetrieval {
    fn retrieve(&self, query: &str, _top_k: usize, batch_hint: usize) -> RagoResult<Vec<DocId>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_batch_hint.store(batch_hint, Ordering::SeqCst);
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        Ok(self.rankings.get(query).cloned().unwrap_or_default())
    }
}

/// Retrieval that always fails.
#[derive(Debug, Default)]
pub struct FailingRetrieval;

impl IRetrievalBackend for FailingRetrieval {
    fn retrieve(&self, query: &str, _top_k: usize, _batch_hint: usize) -> RagoResult<Vec<DocId>> {
        Err(BackendError::RetrievalFailed {
            query: query.to_string(),
            reason: "index unavailable".into(),
        }
        .into())
    }
}

/// Retrieval that panics on the retrieval thread.
#[derive(Debug, Default)]
pub struct PanickingRetrieval;

impl IRetrievalBackend for PanickingRetrieval {
    fn retrieve(&self, _query: &str, _top_k: usize, _batch_hint: usize) -> RagoResult<Vec<DocId>> {
        panic!("simulated retrieval crash");
    }
}

/// Document store serving fixed-format evidence text.
#[derive(Debug, Default)]
pub struct StaticDocumentStore {
    failing: HashSet<DocId>,
    fetches: AtomicUsize,
}

impl StaticDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make fetches of `doc_ids` fail.
    pub fn failing_on(mut self, doc_ids: impl IntoIterator<Item = DocId>) -> Self {
        self.failing.extend(doc_ids);
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Text stored for `doc_id`.
    pub fn text_for(doc_id: DocId) -> String {
        format!("Doc#{doc_id} :: A short block of evidence text used for grounding.")
    }
}

impl IDocumentStore for StaticDocumentStore {
    fn fetch_text(&self, doc_id: DocId) -> RagoResult<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&doc_id) {
            return Err(BackendError::FetchFailed {
                doc_id,
                reason: "document shard offline".into(),
            }
            .into());
        }
        Ok(Self::text_for(doc_id))
    }
}

/// Generation whose latency grows with context size and shrinks in cheap mode.
///
/// Sleeps `base_ms` (or `cheap_base_ms`) plus one millisecond per
/// `bytes_per_ms` bytes of context.
#[derive(Debug)]
pub struct SleepyGenerator {
    base_ms: u64,
    cheap_base_ms: u64,
    bytes_per_ms: usize,
    calls: AtomicUsize,
}

impl SleepyGenerator {
    pub fn new(base_ms: u64, cheap_base_ms: u64, bytes_per_ms: usize) -> Self {
        Self {
            base_ms,
            cheap_base_ms,
            bytes_per_ms: bytes_per_ms.max(1),
            calls: AtomicUsize::new(0),
        }
    }

    /// 20ms quality / 12ms cheap, plus 1ms per 300 bytes of context.
    pub fn reference() -> Self {
        Self::new(20, 12, 300)
    }

    /// No simulated latency at all.
    pub fn instant() -> Self {
        Self::new(0, 0, usize::MAX)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn delay_for(&self, context_len: usize, cheap_mode: bool) -> Duration {
        let base = if cheap_mode {
            self.cheap_base_ms
        } else {
            self.base_ms
        };
        Duration::from_millis(base + (context_len / self.bytes_per_ms) as u64)
    }
}

impl IGenerationBackend for SleepyGenerator {
    fn generate(&self, question: &str, context: &str, cheap_mode: bool) -> RagoResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay_for(context.len(), cheap_mode);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        Ok(format!(
            "Answer: {question}\n(grounded in {} bytes of context)",
            context.len()
        ))
    }
}

/// Generation that always fails.
#[derive(Debug, Default)]
pub struct FailingGenerator;

impl IGenerationBackend for FailingGenerator {
    fn generate(&self, _question: &str, _context: &str, _cheap_mode: bool) -> RagoResult<String> {
        Err(BackendError::GenerationFailed {
            reason: "model server unreachable".into(),
        }
        .into())
    }
}
