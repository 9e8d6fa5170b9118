//! Bounded request log: question, knobs, timings, and assembly outcome per request.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rago_core::errors::RagoResult;
use rago_core::models::{RequestOutcome, Timings, TuneKnobs};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single served request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestLogEntry {
    pub id: Uuid,
    pub question: String,
    pub knobs: TuneKnobs,
    pub timings: Timings,
    pub doc_count: usize,
    pub blocks_included: usize,
    pub blocks_skipped: usize,
    pub tokens_used: usize,
    pub timestamp: DateTime<Utc>,
}

impl RequestLogEntry {
    /// Build an entry for `outcome`, stamped now.
    pub fn from_outcome(outcome: &RequestOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: outcome.question.clone(),
            knobs: outcome.knobs,
            timings: outcome.timings,
            doc_count: outcome.doc_ids.len(),
            blocks_included: outcome.assembly.included.len(),
            blocks_skipped: outcome.assembly.skipped.len(),
            tokens_used: outcome.assembly.tokens_used,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only log that keeps the most recent `max_entries` requests.
#[derive(Debug, Clone)]
pub struct RequestLog {
    entries: VecDeque<RequestLogEntry>,
    max_entries: usize,
}

impl RequestLog {
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Record an entry, dropping the oldest when full.
    pub fn record(&mut self, entry: RequestLogEntry) {
        tracing::trace!(
            event = "request_logged",
            id = %entry.id,
            question = %entry.question,
            e2e_ms = entry.timings.e2e_ms,
            "request logged"
        );
        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// The newest `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> Vec<&RequestLogEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries within `[from, to]`.
    pub fn between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<&RequestLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.timestamp >= from && e.timestamp <= to)
            .collect()
    }

    /// Serialize the retained entries as a JSON array.
    pub fn snapshot_json(&self) -> RagoResult<serde_json::Value> {
        Ok(serde_json::to_value(&self.entries)?)
    }
}

impl Default for RequestLog {
    fn default() -> Self {
        Self::with_capacity(rago_core::config::defaults::DEFAULT_REQUEST_LOG_CAPACITY)
    }
}
