mod document_store;
mod generation;
mod retrieval;

pub use document_store::IDocumentStore;
pub use generation::IGenerationBackend;
pub use retrieval::IRetrievalBackend;
