use crate::errors::RagoResult;
use crate::models::DocId;

/// Evidence text source. Called only on a block cache miss.
pub trait IDocumentStore: Send + Sync {
    fn fetch_text(&self, doc_id: DocId) -> RagoResult<String>;
}
