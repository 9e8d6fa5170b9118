//! Budgeted context assembly over the block cache.
//!
//! Blocks are taken in doc-id order while the budget lasts. Every block costs
//! the same fixed number of tokens; the first block that would overdraw the
//! budget ends assembly (strict prefix, nothing after it is considered).
//! Text comes from the block cache, or from the document store on a miss, in
//! which case it is written back to the cache before use.
//!
//! A failed fetch drops only that document: it is logged, reported in
//! [`AssemblyReport::skipped`], charged nothing, and never cached.

use std::sync::Arc;

use rago_cache::BlockCache;
use rago_core::models::{AssemblyReport, DocId};
use rago_core::traits::IDocumentStore;
use rago_observability::tracing_setup::events;
use tracing::debug;

pub struct ContextAssembler<'a> {
    cache: &'a BlockCache,
    store: &'a dyn IDocumentStore,
    block_token_cost: usize,
}

impl<'a> ContextAssembler<'a> {
    pub fn new(cache: &'a BlockCache, store: &'a dyn IDocumentStore, block_token_cost: usize) -> Self {
        Self {
            cache,
            store,
            block_token_cost,
        }
    }

    /// Stitch blocks for `doc_ids` into newline-terminated context text.
    pub fn assemble(&self, doc_ids: &[DocId], token_budget: usize) -> AssemblyReport {
        let mut report = AssemblyReport {
            context: String::new(),
            tokens_left: token_budget,
            ..AssemblyReport::default()
        };

        for &doc_id in doc_ids {
            if report.tokens_left < self.block_token_cost {
                debug!(
                    doc_id,
                    tokens_left = report.tokens_left,
                    "token budget exhausted"
                );
                break;
            }

            let Some((text, hit)) = self.block(doc_id) else {
                report.skipped.push(doc_id);
                continue;
            };
            if hit {
                report.block_hits += 1;
            }

            report.tokens_left -= self.block_token_cost;
            report.tokens_used += self.block_token_cost;
            report.context.push_str(&text);
            report.context.push('\n');
            report.included.push(doc_id);
        }

        debug!(
            included = report.included.len(),
            skipped = report.skipped.len(),
            block_hits = report.block_hits,
            tokens_used = report.tokens_used,
            "context assembled"
        );
        report
    }

    /// Cached text for `doc_id`, fetching and caching it on a miss.
    /// `None` when the fetch fails.
    fn block(&self, doc_id: DocId) -> Option<(Arc<str>, bool)> {
        if let Some(text) = self.cache.get(doc_id) {
            return Some((text, true));
        }
        match self.store.fetch_text(doc_id) {
            Ok(text) => {
                let text: Arc<str> = Arc::from(text);
                self.cache.put(doc_id, Arc::clone(&text));
                Some((text, false))
            }
            Err(e) => {
                events::document_skipped(doc_id, &e.to_string());
                None
            }
        }
    }
}
