/// RAGO system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "RAGO_LOG";

/// Length in bytes of a query fingerprint (blake3 output).
pub const QUERY_FINGERPRINT_LEN: usize = 32;

/// Upper bound on worker threads for batch serving.
pub const MAX_WORKER_THREADS: usize = 64;
