use crate::models::DocId;

/// Failures reported by the external collaborators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    #[error("retrieval failed for query {query:?}: {reason}")]
    RetrievalFailed { query: String, reason: String },

    #[error("retrieval task panicked before producing results")]
    RetrievalPanicked,

    #[error("document fetch failed for doc {doc_id}: {reason}")]
    FetchFailed { doc_id: DocId, reason: String },

    #[error("generation failed: {reason}")]
    GenerationFailed { reason: String },
}
