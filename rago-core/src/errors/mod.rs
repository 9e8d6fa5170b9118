mod backend_error;
mod config_error;

pub use backend_error::BackendError;
pub use config_error::ConfigError;

/// Root error type for the serving core.
#[derive(Debug, thiserror::Error)]
pub enum RagoError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("backend error: {0}")]
    BackendError(#[from] BackendError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("runtime error: {0}")]
    RuntimeError(String),
}

pub type RagoResult<T> = Result<T, RagoError>;
