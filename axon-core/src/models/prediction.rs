//! Result of one forward pass through the predictor.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ModelVariant;

/// One prediction. Created fresh per call, immutable, owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Which head produced this prediction.
    pub variant: ModelVariant,
    /// Task-specific output vector. Empty for a degenerate prediction.
    pub output: Vec<f64>,
    /// Per-dimension confidence in [0, 1]; same length as `output`.
    /// Uniformly `1 - uncertainty` for every dimension.
    pub confidence: Vec<f64>,
    /// Scalar uncertainty in [0, 1] from Monte Carlo dropout.
    pub uncertainty: f64,
    /// Prediction horizon requested by the caller.
    pub horizon: Duration,
    /// Last-layer attention weights (window x window), for explainability.
    pub attention: Vec<Vec<f64>>,
    /// Human-readable account of the prediction.
    pub explanation: String,
    /// When the prediction was generated.
    pub generated_at: DateTime<Utc>,
}

impl Prediction {
    /// Degenerate prediction returned when history is empty: maximum
    /// uncertainty, zero confidence, empty output vector. The transformer
    /// stack is never run for these.
    pub fn degenerate(variant: ModelVariant, horizon: Duration) -> Self {
        Self {
            variant,
            output: Vec::new(),
            confidence: Vec::new(),
            uncertainty: 1.0,
            horizon,
            attention: Vec::new(),
            explanation: format!("{variant}: no observations available, prediction withheld"),
            generated_at: Utc::now(),
        }
    }

    /// Whether this is a degenerate (empty-history) prediction.
    pub fn is_degenerate(&self) -> bool {
        self.output.is_empty()
    }

    /// Scalar confidence: `1 - uncertainty`.
    pub fn overall_confidence(&self) -> f64 {
        (1.0 - self.uncertainty).clamp(0.0, 1.0)
    }
}
