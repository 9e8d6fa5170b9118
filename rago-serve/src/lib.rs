//! # rago-serve
//!
//! The serving control loop. One request flows through:
//!
//! ```text
//! ServeEngine::serve(question)
//! ├── KnobController      previous timings → TuneKnobs
//! ├── OverlapScheduler    RetrievalCache hit, or spawn retrieval ∥ prep work → join
//! ├── ContextAssembler    doc ids → BlockCache (cache-aside) → budgeted context
//! ├── IGenerationBackend  context → answer
//! └── feedback            Timings → controller, metrics, request log
//! ```
//!
//! Concurrent requests share the engine (and both caches) by reference;
//! `serve_batch` fans a slice of questions out over a fixed worker pool.

pub mod assembly;
pub mod engine;
pub mod overlap;

pub use assembly::ContextAssembler;
pub use engine::{EngineSnapshot, ServeEngine};
pub use overlap::{OverlapScheduler, Resolved};
