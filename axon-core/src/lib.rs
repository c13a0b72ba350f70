//! # axon-core
//!
//! Foundation crate for the Axon network-telemetry predictor.
//! Defines all types, models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{AttentionKind, FederationConfig, ModelVariant, PredictorConfig};
pub use errors::{AxonError, AxonResult};
pub use models::{Observation, PerformanceMetrics, Prediction};
