// Single source of truth for all default values.

// --- Caches ---
pub const DEFAULT_RETRIEVAL_CACHE_CAPACITY: usize = 512;
pub const DEFAULT_BLOCK_CACHE_CAPACITY: usize = 4_096;

// --- Context assembly ---
pub const DEFAULT_BLOCK_TOKEN_COST: usize = 40;
pub const DEFAULT_TOKEN_BUDGET: usize = 320;
pub const DEFAULT_CHEAP_TOKEN_BUDGET: usize = 220;

// --- Knob controller ---
pub const DEFAULT_P95_BUDGET_MS: f64 = 40.0;
pub const DEFAULT_GENERATION_PRESSURE_RATIO: f64 = 0.55;
pub const DEFAULT_RETRIEVAL_PRESSURE_RATIO: f64 = 0.25;
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_CHEAP_TOP_K: usize = 6;
pub const DEFAULT_BATCH: usize = 8;
pub const DEFAULT_PRESSURED_BATCH: usize = 16;
pub const DEFAULT_SMOOTHING_WINDOW: usize = 1;
pub const DEFAULT_WARMUP_RETRIEVAL_MS: f64 = 8.0;
pub const DEFAULT_WARMUP_GENERATION_MS: f64 = 18.0;

// --- Overlap ---
pub const DEFAULT_PREP_MS: u64 = 3;
pub const DEFAULT_CHEAP_PREP_MS: u64 = 2;

// --- Serving ---
pub const DEFAULT_WORKER_THREADS: usize = 4;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_REQUEST_LOG_CAPACITY: usize = 10_000;
pub const DEFAULT_LATENCY_WINDOW: usize = 256;
