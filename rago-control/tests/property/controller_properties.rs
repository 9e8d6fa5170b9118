use rago_control::pick_knobs;
use rago_core::config::ControllerConfig;
use proptest::prelude::*;

proptest! {
    #[test]
    fn total_over_non_negative_inputs(budget in 1.0f64..1_000.0, retr in 0.0f64..1_000.0, gen in 0.0f64..1_000.0) {
        let config = ControllerConfig::default();
        let knobs = pick_knobs(&config, budget, retr, gen);
        prop_assert!(knobs.top_k == config.top_k || knobs.top_k == config.cheap_top_k);
        prop_assert!(knobs.batch == config.batch || knobs.batch == config.pressured_batch);
        prop_assert_eq!(knobs.cheap_mode, knobs.top_k == config.cheap_top_k);
    }

    #[test]
    fn cheap_mode_is_monotone_in_generation(budget in 1.0f64..1_000.0, retr in 0.0f64..1_000.0, a in 0.0f64..1_000.0, b in 0.0f64..1_000.0) {
        let config = ControllerConfig::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let k_lo = pick_knobs(&config, budget, retr, lo);
        let k_hi = pick_knobs(&config, budget, retr, hi);
        // Once cheap, a slower generation never switches back.
        prop_assert!(!k_lo.cheap_mode || k_hi.cheap_mode);
        prop_assert!(k_hi.top_k <= k_lo.top_k);
    }

    #[test]
    fn batch_ignores_generation(budget in 1.0f64..1_000.0, retr in 0.0f64..1_000.0, a in 0.0f64..1_000.0, b in 0.0f64..1_000.0) {
        let config = ControllerConfig::default();
        prop_assert_eq!(
            pick_knobs(&config, budget, retr, a).batch,
            pick_knobs(&config, budget, retr, b).batch
        );
    }
}
