//! Configuration for federated parameter aggregation.
//!
//! # Examples
//!
//! ```
//! use axon_core::config::FederationConfig;
//!
//! let config = FederationConfig::default();
//! assert!(!config.enabled);
//! assert!((config.local_weight - 1.0).abs() < f64::EPSILON);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Configuration for the federated-learning subsystem.
///
/// When `enabled` is `false` (the default), the predictor runs standalone
/// and never exchanges parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FederationConfig {
    /// Whether federated learning is enabled. Default: false.
    pub enabled: bool,
    /// Identity of this node in the federation. Default: random v4.
    pub node_id: Uuid,
    /// Period between federated aggregation rounds. Default: 60s.
    pub aggregation_period: Duration,
    /// Whether the local parameter vector joins the weighted average. Default: true.
    pub include_local: bool,
    /// Aggregation weight of the local vector when included. Default: 1.0.
    pub local_weight: f64,
}

impl Default for FederationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            node_id: Uuid::new_v4(),
            aggregation_period: Duration::from_secs(60),
            include_local: true,
            local_weight: 1.0,
        }
    }
}
