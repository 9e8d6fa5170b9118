/// Configuration errors. Always fatal at construction time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{cache} cache capacity must be at least 1")]
    ZeroCapacity { cache: String },

    #[error("invalid budget for {field}: {value}")]
    InvalidBudget { field: String, value: String },

    #[error("invalid threshold for {field}: {value}")]
    InvalidThreshold { field: String, value: f64 },

    #[error("config parse failed: {0}")]
    Parse(String),
}
