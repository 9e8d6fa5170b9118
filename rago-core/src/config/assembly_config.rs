use serde::{Deserialize, Serialize};

use super::defaults;

/// Context assembly budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Fixed token cost charged for every evidence block.
    pub block_token_cost: usize,
    /// Token budget used in quality mode.
    pub token_budget: usize,
    /// Token budget used in cheap mode. Must not exceed `token_budget`.
    pub cheap_token_budget: usize,
}

impl AssemblyConfig {
    /// Budget for a request, chosen by its cheap-mode knob.
    pub fn budget_for(&self, cheap_mode: bool) -> usize {
        if cheap_mode {
            self.cheap_token_budget
        } else {
            self.token_budget
        }
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            block_token_cost: defaults::DEFAULT_BLOCK_TOKEN_COST,
            token_budget: defaults::DEFAULT_TOKEN_BUDGET,
            cheap_token_budget: defaults::DEFAULT_CHEAP_TOKEN_BUDGET,
        }
    }
}
