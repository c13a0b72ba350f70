use axon_core::config::{AttentionKind, ModelVariant, PredictorConfig};
use axon_core::errors::{AxonError, ConfigError};

#[test]
fn default_config_is_valid() {
    let config = PredictorConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.variant, ModelVariant::GenericPredictor);
    assert_eq!(config.attention, AttentionKind::SelfAttention);
    assert_eq!(config.head_dim(), config.model_dim / config.num_heads);
}

#[test]
fn rejects_non_divisible_head_count() {
    let config = PredictorConfig {
        model_dim: 7,
        num_heads: 2,
        ..PredictorConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(AxonError::Config(ConfigError::HeadsDoNotDivideDim {
            model_dim: 7,
            num_heads: 2,
        }))
    ));
}

#[test]
fn rejects_zero_heads() {
    let config = PredictorConfig {
        num_heads: 0,
        ..PredictorConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(AxonError::Config(ConfigError::HeadsDoNotDivideDim { .. }))
    ));
}

#[test]
fn rejects_out_of_range_dimensions() {
    let too_small = PredictorConfig {
        model_dim: 2,
        num_heads: 1,
        ..PredictorConfig::default()
    };
    assert!(matches!(
        too_small.validate(),
        Err(AxonError::Config(ConfigError::DimensionOutOfRange { .. }))
    ));

    let too_many_layers = PredictorConfig {
        num_layers: 9,
        ..PredictorConfig::default()
    };
    assert!(matches!(
        too_many_layers.validate(),
        Err(AxonError::Config(ConfigError::LayersOutOfRange { .. }))
    ));

    let bad_window = PredictorConfig {
        context_window: 1,
        ..PredictorConfig::default()
    };
    assert!(matches!(
        bad_window.validate(),
        Err(AxonError::Config(ConfigError::WindowOutOfRange { .. }))
    ));
}

#[test]
fn rejects_invalid_rates_and_samples() {
    let bad_dropout = PredictorConfig {
        dropout_rate: 1.0,
        ..PredictorConfig::default()
    };
    assert!(matches!(
        bad_dropout.validate(),
        Err(AxonError::Config(ConfigError::InvalidRate {
            name: "dropout_rate",
            ..
        }))
    ));

    let bad_lr = PredictorConfig {
        learning_rate: 0.0,
        ..PredictorConfig::default()
    };
    assert!(matches!(
        bad_lr.validate(),
        Err(AxonError::Config(ConfigError::InvalidRate {
            name: "learning_rate",
            ..
        }))
    ));

    let no_samples = PredictorConfig {
        mc_samples: 0,
        ..PredictorConfig::default()
    };
    assert!(matches!(
        no_samples.validate(),
        Err(AxonError::Config(ConfigError::ZeroSamples { samples: 0 }))
    ));
}

#[test]
fn variant_output_dims_are_fixed() {
    assert_eq!(ModelVariant::HandoverPredictor.output_dim(), 3);
    assert_eq!(ModelVariant::ResourceOptimizer.output_dim(), 4);
    assert_eq!(ModelVariant::AnomalyDetector.output_dim(), 2);
    assert_eq!(ModelVariant::TrafficForecaster.output_dim(), 4);
    assert_eq!(ModelVariant::EnergyOptimizer.output_dim(), 3);
    assert_eq!(ModelVariant::GenericPredictor.output_dim(), 4);
    assert_eq!(
        ModelVariant::HandoverPredictor.to_string(),
        "HandoverPredictor"
    );
}

#[test]
fn parses_partial_toml_with_defaults() {
    let config = PredictorConfig::from_toml_str(
        r#"
        model_dim = 8
        num_heads = 2
        num_layers = 1
        "#,
    )
    .unwrap();
    assert_eq!(config.model_dim, 8);
    assert_eq!(config.num_heads, 2);
    assert_eq!(config.context_window, 16);
}

#[test]
fn toml_with_invalid_architecture_fails_validation() {
    let result = PredictorConfig::from_toml_str("model_dim = 10\nnum_heads = 3\n");
    assert!(matches!(
        result,
        Err(AxonError::Config(ConfigError::HeadsDoNotDivideDim { .. }))
    ));
}

#[test]
fn unparseable_toml_is_a_config_error() {
    let result = PredictorConfig::from_toml_str("model_dim = \"eight\"");
    assert!(matches!(
        result,
        Err(AxonError::Config(ConfigError::Unparseable { .. }))
    ));
}
