use rago_core::config::*;
use rago_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = RagoConfig::from_toml("").unwrap();

    // Cache defaults
    assert_eq!(config.cache.retrieval_capacity, 512);
    assert_eq!(config.cache.block_capacity, 4096);

    // Assembly defaults
    assert_eq!(config.assembly.block_token_cost, 40);
    assert_eq!(config.assembly.token_budget, 320);
    assert_eq!(config.assembly.cheap_token_budget, 220);

    // Controller defaults
    assert_eq!(config.controller.p95_budget_ms, 40.0);
    assert_eq!(config.controller.generation_pressure_ratio, 0.55);
    assert_eq!(config.controller.retrieval_pressure_ratio, 0.25);
    assert_eq!(config.controller.top_k, 10);
    assert_eq!(config.controller.cheap_top_k, 6);
    assert_eq!(config.controller.batch, 8);
    assert_eq!(config.controller.pressured_batch, 16);
    assert_eq!(config.controller.smoothing_window, 1);
    assert_eq!(config.controller.warmup_retrieval_ms, 8.0);
    assert_eq!(config.controller.warmup_generation_ms, 18.0);

    // Overlap / serve / observability defaults
    assert_eq!(config.overlap.prep_ms, 3);
    assert_eq!(config.overlap.cheap_prep_ms, 2);
    assert_eq!(config.serve.worker_threads, 4);
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.observability.request_log_capacity, 10_000);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[cache]
retrieval_capacity = 64

[controller]
p95_budget_ms = 120.0
smoothing_window = 4
"#;
    let config = RagoConfig::from_toml(toml).unwrap();
    assert_eq!(config.cache.retrieval_capacity, 64);
    // Non-overridden fields keep defaults
    assert_eq!(config.cache.block_capacity, 4096);
    assert_eq!(config.controller.p95_budget_ms, 120.0);
    assert_eq!(config.controller.smoothing_window, 4);
    assert_eq!(config.controller.top_k, 10);
}

#[test]
fn config_serde_roundtrip() {
    let config = RagoConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = RagoConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn zero_retrieval_capacity_is_rejected() {
    let err = RagoConfig::from_toml("[cache]\nretrieval_capacity = 0\n").unwrap_err();
    assert_eq!(
        err,
        ConfigError::ZeroCapacity {
            cache: "retrieval".into()
        }
    );
}

#[test]
fn zero_block_capacity_is_rejected() {
    let err = RagoConfig::from_toml("[cache]\nblock_capacity = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ZeroCapacity { cache } if cache == "block"));
}

#[test]
fn zero_token_budget_is_rejected() {
    let err = RagoConfig::from_toml("[assembly]\ntoken_budget = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBudget { .. }));
}

#[test]
fn cheap_budget_above_quality_budget_is_rejected() {
    let toml = "[assembly]\ntoken_budget = 100\ncheap_token_budget = 200\n";
    let err = RagoConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBudget { field, .. } if field == "assembly.cheap_token_budget"));
}

#[test]
fn non_positive_p95_budget_is_rejected() {
    let err = RagoConfig::from_toml("[controller]\np95_budget_ms = 0.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBudget { .. }));
}

#[test]
fn negative_ratio_is_rejected() {
    let err =
        RagoConfig::from_toml("[controller]\ngeneration_pressure_ratio = -0.5\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidThreshold { .. }));
}

#[test]
fn zero_worker_threads_is_rejected() {
    let err = RagoConfig::from_toml("[serve]\nworker_threads = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBudget { field, .. } if field == "serve.worker_threads"));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let err = RagoConfig::from_toml("[cache\nretrieval_capacity = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn budget_and_prep_follow_cheap_mode() {
    let config = RagoConfig::default();
    assert_eq!(config.assembly.budget_for(false), 320);
    assert_eq!(config.assembly.budget_for(true), 220);
    assert_eq!(config.overlap.prep_for(false).as_millis(), 3);
    assert_eq!(config.overlap.prep_for(true).as_millis(), 2);
}
