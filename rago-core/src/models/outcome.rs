use serde::{Deserialize, Serialize};

use super::{DocId, Timings, TuneKnobs};

/// What the context assembler produced for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyReport {
    /// Newline-delimited evidence blocks, in doc-id order.
    pub context: String,
    /// Documents whose blocks made it into the context.
    pub included: Vec<DocId>,
    /// Documents dropped because their fetch failed.
    pub skipped: Vec<DocId>,
    /// Tokens charged against the budget.
    pub tokens_used: usize,
    /// Tokens remaining when assembly stopped.
    pub tokens_left: usize,
    /// Block cache hits observed during assembly.
    pub block_hits: usize,
}

/// Result of serving one request end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestOutcome {
    pub question: String,
    pub answer: String,
    pub knobs: TuneKnobs,
    pub doc_ids: Vec<DocId>,
    pub assembly: AssemblyReport,
    pub timings: Timings,
}
