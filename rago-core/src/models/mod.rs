mod knobs;
mod outcome;
mod timings;

pub use knobs::TuneKnobs;
pub use outcome::{AssemblyReport, RequestOutcome};
pub use timings::Timings;

/// Identifier of a document in the retrieval corpus.
pub type DocId = u64;
