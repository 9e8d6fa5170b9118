//! Structured log events for the serving loop.
//!
//! Each function emits a `tracing` event with structured fields.

use rago_core::models::{DocId, Timings, TuneKnobs};

/// Log a completed request.
pub fn request_served(question: &str, knobs: &TuneKnobs, timings: &Timings) {
    tracing::info!(
        event = "request_served",
        question = %question,
        top_k = knobs.top_k,
        batch = knobs.batch,
        cheap_mode = knobs.cheap_mode,
        e2e_ms = timings.e2e_ms,
        retrieval_ms = timings.retrieval_ms,
        context_ms = timings.context_ms,
        gen_ms = timings.gen_ms,
        cache_hit = timings.cache_hit,
        "request served"
    );
}

/// Log a retrieval cache hit that skipped the backend.
pub fn retrieval_cache_hit(question: &str, doc_count: usize) {
    tracing::debug!(
        event = "retrieval_cache_hit",
        question = %question,
        doc_count = doc_count,
        "retrieval cache hit"
    );
}

/// Log a document dropped from the context because its fetch failed.
pub fn document_skipped(doc_id: DocId, reason: &str) {
    tracing::warn!(
        event = "document_skipped",
        doc_id = doc_id,
        reason = %reason,
        "document fetch failed, skipping"
    );
}

/// Log a change in the knobs handed to consecutive requests.
pub fn knobs_changed(previous: &TuneKnobs, next: &TuneKnobs) {
    tracing::info!(
        event = "knobs_changed",
        previous = %previous,
        next = %next,
        "execution knobs changed"
    );
}

/// Log a request that failed as a whole.
pub fn request_failed(question: &str, error: &str) {
    tracing::warn!(
        event = "request_failed",
        question = %question,
        error = %error,
        "request failed"
    );
}
