use serde::{Deserialize, Serialize};

/// Per-request execution knobs produced by the knob controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TuneKnobs {
    /// Number of documents requested from retrieval.
    pub top_k: usize,
    /// Advisory micro-batch size for the retrieval backend.
    pub batch: usize,
    /// Cheaper generation path and smaller context budget.
    pub cheap_mode: bool,
}

impl std::fmt::Display for TuneKnobs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "top_k={} batch={} cheap_mode={}",
            self.top_k,
            self.batch,
            if self.cheap_mode { "on" } else { "off" }
        )
    }
}
