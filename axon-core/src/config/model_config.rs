//! Configuration for the transformer architecture and training thresholds.
//!
//! # Examples
//!
//! ```
//! use axon_core::config::PredictorConfig;
//!
//! let config = PredictorConfig::default();
//! assert_eq!(config.model_dim % config.num_heads, 0);
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{AxonResult, ConfigError};

/// Task the predictor is configured for. Selects the output head: each
/// variant has a fixed output dimension and its own squashing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelVariant {
    /// Handover likelihood, target-cell score, urgency.
    HandoverPredictor,
    /// Demand per resource class (PRBs, backhaul, compute, spectrum).
    ResourceOptimizer,
    /// Anomaly score and severity.
    AnomalyDetector,
    /// Traffic volume forecast per class.
    TrafficForecaster,
    /// Energy draw, idle headroom, sleep opportunity.
    EnergyOptimizer,
    /// Untyped forecast over the leading feature dimensions.
    GenericPredictor,
}

impl ModelVariant {
    /// Length of the output vector produced by this variant's head.
    pub fn output_dim(self) -> usize {
        match self {
            Self::HandoverPredictor => 3,
            Self::ResourceOptimizer => 4,
            Self::AnomalyDetector => 2,
            Self::TrafficForecaster => 4,
            Self::EnergyOptimizer => 3,
            Self::GenericPredictor => 4,
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HandoverPredictor => "HandoverPredictor",
            Self::ResourceOptimizer => "ResourceOptimizer",
            Self::AnomalyDetector => "AnomalyDetector",
            Self::TrafficForecaster => "TrafficForecaster",
            Self::EnergyOptimizer => "EnergyOptimizer",
            Self::GenericPredictor => "GenericPredictor",
        };
        write!(f, "{name}")
    }
}

/// Attention mechanism over the observation window. All kinds attend over
/// the bounded context window; the kind is recorded for reporting, and
/// the window bound itself provides the sliding-window behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttentionKind {
    SelfAttention,
    CrossAttention,
    SlidingWindow,
}

/// Full architecture and threshold configuration for one predictor
/// instance. Validated once at construction; invalid architectures are
/// fatal and the instance is never created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Which task head the model drives. Default: GenericPredictor.
    pub variant: ModelVariant,
    /// Attention mechanism. Default: SelfAttention.
    pub attention: AttentionKind,
    /// Width of every encoded observation vector. Default: 64.
    pub model_dim: usize,
    /// Number of parallel attention heads. Must divide `model_dim`. Default: 4.
    pub num_heads: usize,
    /// Number of stacked transformer blocks. Default: 2.
    pub num_layers: usize,
    /// Number of most recent observations attended over. Default: 16.
    pub context_window: usize,
    /// Fraction of feed-forward activations zeroed per stochastic pass. Default: 0.1.
    pub dropout_rate: f64,
    /// Stochastic forward passes per uncertainty estimate. Default: 50.
    pub mc_samples: usize,
    /// Error below this counts the prediction as correct. Default: 0.1.
    pub correctness_threshold: f64,
    /// Error above this triggers a parameter adjustment. Default: 0.05.
    pub adjustment_threshold: f64,
    /// Step size for the online parameter adjustment. Default: 0.01.
    pub learning_rate: f64,
    /// Seed for the injected random source. Default: 42.
    pub rng_seed: u64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            variant: ModelVariant::GenericPredictor,
            attention: AttentionKind::SelfAttention,
            model_dim: 64,
            num_heads: 4,
            num_layers: 2,
            context_window: 16,
            dropout_rate: constants::DEFAULT_DROPOUT_RATE,
            mc_samples: constants::DEFAULT_MC_SAMPLES,
            correctness_threshold: constants::DEFAULT_CORRECTNESS_THRESHOLD,
            adjustment_threshold: constants::DEFAULT_ADJUSTMENT_THRESHOLD,
            learning_rate: constants::DEFAULT_LEARNING_RATE,
            rng_seed: 42,
        }
    }
}

impl PredictorConfig {
    /// Validate the architecture. Returns the first violation found.
    pub fn validate(&self) -> AxonResult<()> {
        if self.model_dim < constants::MIN_MODEL_DIM || self.model_dim > constants::MAX_MODEL_DIM {
            return Err(ConfigError::DimensionOutOfRange {
                model_dim: self.model_dim,
                min: constants::MIN_MODEL_DIM,
                max: constants::MAX_MODEL_DIM,
            }
            .into());
        }
        if self.num_heads == 0 || self.model_dim % self.num_heads != 0 {
            return Err(ConfigError::HeadsDoNotDivideDim {
                model_dim: self.model_dim,
                num_heads: self.num_heads,
            }
            .into());
        }
        if self.num_layers == 0 || self.num_layers > constants::MAX_NUM_LAYERS {
            return Err(ConfigError::LayersOutOfRange {
                num_layers: self.num_layers,
                max: constants::MAX_NUM_LAYERS,
            }
            .into());
        }
        Self::validate_window(self.context_window)?;
        if !(0.0..1.0).contains(&self.dropout_rate) {
            return Err(ConfigError::InvalidRate {
                name: "dropout_rate",
                value: self.dropout_rate,
                bounds: "[0, 1)",
            }
            .into());
        }
        if self.mc_samples == 0 {
            return Err(ConfigError::ZeroSamples {
                samples: self.mc_samples,
            }
            .into());
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(ConfigError::InvalidRate {
                name: "learning_rate",
                value: self.learning_rate,
                bounds: "(0, 1]",
            }
            .into());
        }
        Ok(())
    }

    /// Validate a context window on its own (used when reconfiguring
    /// attention after construction).
    pub fn validate_window(window: usize) -> AxonResult<()> {
        if window < constants::MIN_CONTEXT_WINDOW || window > constants::MAX_CONTEXT_WINDOW {
            return Err(ConfigError::WindowOutOfRange {
                window,
                min: constants::MIN_CONTEXT_WINDOW,
                max: constants::MAX_CONTEXT_WINDOW,
            }
            .into());
        }
        Ok(())
    }

    /// Width of one attention head: `model_dim / num_heads`.
    pub fn head_dim(&self) -> usize {
        self.model_dim / self.num_heads
    }

    /// Parse a config from TOML text. Missing fields take defaults; the
    /// result is validated before being returned.
    pub fn from_toml_str(text: &str) -> AxonResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Unparseable {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}
