mod assembly_config;
mod cache_config;
mod controller_config;
pub mod defaults;
mod observability_config;
mod overlap_config;
mod serve_config;

pub use assembly_config::AssemblyConfig;
pub use cache_config::CacheConfig;
pub use controller_config::ControllerConfig;
pub use observability_config::ObservabilityConfig;
pub use overlap_config::OverlapConfig;
pub use serve_config::ServeConfig;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_WORKER_THREADS;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RagoConfig {
    pub cache: CacheConfig,
    pub assembly: AssemblyConfig,
    pub controller: ControllerConfig,
    pub overlap: OverlapConfig,
    pub serve: ServeConfig,
    pub observability: ObservabilityConfig,
}

impl RagoConfig {
    /// Parse a TOML document and validate it. Missing sections and fields fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the serving core cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.retrieval_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                cache: "retrieval".into(),
            });
        }
        if self.cache.block_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                cache: "block".into(),
            });
        }

        let a = &self.assembly;
        positive("assembly.block_token_cost", a.block_token_cost)?;
        positive("assembly.token_budget", a.token_budget)?;
        positive("assembly.cheap_token_budget", a.cheap_token_budget)?;
        if a.cheap_token_budget > a.token_budget {
            return Err(ConfigError::InvalidBudget {
                field: "assembly.cheap_token_budget".into(),
                value: a.cheap_token_budget.to_string(),
            });
        }

        let c = &self.controller;
        if !c.p95_budget_ms.is_finite() || c.p95_budget_ms <= 0.0 {
            return Err(ConfigError::InvalidBudget {
                field: "controller.p95_budget_ms".into(),
                value: c.p95_budget_ms.to_string(),
            });
        }
        ratio("controller.generation_pressure_ratio", c.generation_pressure_ratio)?;
        ratio("controller.retrieval_pressure_ratio", c.retrieval_pressure_ratio)?;
        positive("controller.top_k", c.top_k)?;
        positive("controller.cheap_top_k", c.cheap_top_k)?;
        positive("controller.batch", c.batch)?;
        positive("controller.pressured_batch", c.pressured_batch)?;
        positive("controller.smoothing_window", c.smoothing_window)?;
        warmup("controller.warmup_retrieval_ms", c.warmup_retrieval_ms)?;
        warmup("controller.warmup_generation_ms", c.warmup_generation_ms)?;

        if self.serve.worker_threads == 0 || self.serve.worker_threads > MAX_WORKER_THREADS {
            return Err(ConfigError::InvalidBudget {
                field: "serve.worker_threads".into(),
                value: self.serve.worker_threads.to_string(),
            });
        }
        positive(
            "observability.request_log_capacity",
            self.observability.request_log_capacity,
        )?;
        positive("observability.latency_window", self.observability.latency_window)?;
        Ok(())
    }
}

fn positive(field: &str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidBudget {
            field: field.into(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn ratio(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidThreshold {
            field: field.into(),
            value,
        });
    }
    Ok(())
}

fn warmup(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidThreshold {
            field: field.into(),
            value,
        });
    }
    Ok(())
}
