use crate::errors::RagoResult;

/// Language-model backend, called once per request after context assembly.
pub trait IGenerationBackend: Send + Sync {
    fn generate(&self, question: &str, context: &str, cheap_mode: bool) -> RagoResult<String>;
}
