//! # rago-core
//!
//! Foundation crate for the RAGO serving core.
//! Defines the shared types, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RagoConfig;
pub use errors::{RagoError, RagoResult};
pub use models::{AssemblyReport, DocId, RequestOutcome, Timings, TuneKnobs};
