//! # axon
//!
//! Transformer-based network-telemetry predictor with online and
//! federated learning, sized for inline use inside a larger control loop.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use axon::{PredictorConfig, TelemetryPredictor};
//! use axon_core::models::Observation;
//!
//! let config = PredictorConfig {
//!     model_dim: 8,
//!     num_heads: 2,
//!     num_layers: 1,
//!     context_window: 4,
//!     mc_samples: 5,
//!     ..PredictorConfig::default()
//! };
//! let mut predictor = TelemetryPredictor::new(config).unwrap();
//! predictor.add_observation(Observation::default());
//! let prediction = predictor.predict(Duration::from_secs(1));
//! assert!(!prediction.output.is_empty());
//! ```

pub mod predictor;
pub mod state;

pub use predictor::{PredictionCallback, TelemetryPredictor};
pub use state::PredictorState;

// Re-export the configuration and model surface callers need.
pub use axon_core::config::{AttentionKind, FederationConfig, ModelVariant, PredictorConfig};
pub use axon_core::models::{Observation, PerformanceMetrics, Prediction};
pub use axon_core::{AxonError, AxonResult};
pub use axon_federation::ParameterShare;
