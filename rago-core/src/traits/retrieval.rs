use crate::errors::RagoResult;
use crate::models::DocId;

/// Vector-index retrieval backend. Called only on a retrieval cache miss.
pub trait IRetrievalBackend: Send + Sync {
    /// Return up to `top_k` document ids for `query`, best first.
    ///
    /// `batch_hint` is the controller's advisory micro-batch size; backends may ignore it.
    fn retrieve(&self, query: &str, top_k: usize, batch_hint: usize) -> RagoResult<Vec<DocId>>;
}
