//! Predictor and federation configuration.

pub mod federation_config;
pub mod model_config;

pub use federation_config::FederationConfig;
pub use model_config::{AttentionKind, ModelVariant, PredictorConfig};
