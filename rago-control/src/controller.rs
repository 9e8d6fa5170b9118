//! Knob selection policy.

use rago_core::config::ControllerConfig;
use rago_core::models::TuneKnobs;
use tracing::debug;

use crate::window::{LatencyWindow, PhaseLatencies};

/// Derive the next request's knobs from the last observed phase latencies.
///
/// Total over all inputs: NaN compares false against both thresholds and
/// therefore yields the unpressured knobs.
pub fn pick_knobs(
    config: &ControllerConfig,
    p95_budget_ms: f64,
    last_retrieval_ms: f64,
    last_generation_ms: f64,
) -> TuneKnobs {
    let generation_bound = last_generation_ms > p95_budget_ms * config.generation_pressure_ratio;
    let retrieval_bound = last_retrieval_ms > p95_budget_ms * config.retrieval_pressure_ratio;

    TuneKnobs {
        top_k: if generation_bound {
            config.cheap_top_k
        } else {
            config.top_k
        },
        batch: if retrieval_bound {
            config.pressured_batch
        } else {
            config.batch
        },
        cheap_mode: generation_bound,
    }
}

/// Stateful front end to [`pick_knobs`] that smooths observations over a window.
///
/// With `smoothing_window = 1` the controller reacts to the previous request
/// only, which is exactly the threshold formula above.
#[derive(Debug, Clone)]
pub struct KnobController {
    config: ControllerConfig,
    window: LatencyWindow,
}

impl KnobController {
    /// Seed the window with the configured warm-up latencies.
    pub fn new(config: ControllerConfig) -> Self {
        let mut window = LatencyWindow::new(config.smoothing_window);
        window.record(PhaseLatencies {
            retrieval_ms: config.warmup_retrieval_ms,
            generation_ms: config.warmup_generation_ms,
        });
        Self { config, window }
    }

    /// Knobs for the next request.
    pub fn next_knobs(&self) -> TuneKnobs {
        let smoothed = self.window.mean();
        let knobs = pick_knobs(
            &self.config,
            self.config.p95_budget_ms,
            smoothed.retrieval_ms,
            smoothed.generation_ms,
        );
        debug!(
            retrieval_ms = smoothed.retrieval_ms,
            generation_ms = smoothed.generation_ms,
            %knobs,
            "picked knobs"
        );
        knobs
    }

    /// Feed back the phase latencies of a finished request.
    pub fn observe(&mut self, retrieval_ms: f64, generation_ms: f64) {
        self.window.record(PhaseLatencies {
            retrieval_ms,
            generation_ms,
        });
    }

    /// Most recently observed latencies (unsmoothed).
    pub fn last(&self) -> PhaseLatencies {
        self.window.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warmup_defaults_yield_quality_knobs() {
        // 18ms gen < 22ms threshold, 8ms retrieval < 10ms threshold.
        let controller = KnobController::new(ControllerConfig::default());
        assert_eq!(
            controller.next_knobs(),
            TuneKnobs {
                top_k: 10,
                batch: 8,
                cheap_mode: false
            }
        );
    }

    #[test]
    fn observe_replaces_previous_with_window_of_one() {
        let mut controller = KnobController::new(ControllerConfig::default());
        controller.observe(12.0, 30.0);
        let knobs = controller.next_knobs();
        assert!(knobs.cheap_mode);
        assert_eq!(knobs.top_k, 6);
        assert_eq!(knobs.batch, 16);

        controller.observe(0.0, 5.0);
        assert_eq!(controller.next_knobs().top_k, 10);
        assert_eq!(controller.last().generation_ms, 5.0);
    }

    #[test]
    fn nan_inputs_fall_back_to_unpressured() {
        let knobs = pick_knobs(&ControllerConfig::default(), 40.0, f64::NAN, f64::NAN);
        assert!(!knobs.cheap_mode);
        assert_eq!(knobs.batch, 8);
    }
}
