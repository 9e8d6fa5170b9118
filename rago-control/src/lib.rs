//! # rago-control
//!
//! Threshold controller that turns recent phase latencies into the next
//! request's [`TuneKnobs`](rago_core::TuneKnobs):
//!
//! - generation above `generation_pressure_ratio × p95` → shallow retrieval + cheap mode
//! - retrieval above `retrieval_pressure_ratio × p95` → larger advisory batch
//!
//! The policy itself is the pure function [`pick_knobs`]. [`KnobController`]
//! adds an optional moving-average window in front of it.

pub mod controller;
pub mod window;

pub use controller::{pick_knobs, KnobController};
pub use window::{LatencyWindow, PhaseLatencies};
