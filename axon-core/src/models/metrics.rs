//! Running performance statistics for one predictor instance.
//!
//! Counters are monotonic; gauges are smoothed with exponential moving
//! averages so a single slow or wrong prediction does not dominate.

use std::collections::HashMap;

use serde::Serialize;

use crate::constants::{LATENCY_EMA_ALPHA, LOSS_EMA_ALPHA};

/// Metric names as exported by [`PerformanceMetrics::as_map`].
pub mod names {
    pub const TOTAL_PREDICTIONS: &str = "total_predictions";
    pub const CORRECT_PREDICTIONS: &str = "correct_predictions";
    pub const PREDICTION_ACCURACY: &str = "prediction_accuracy";
    pub const AVG_INFERENCE_LATENCY_MS: &str = "avg_inference_latency_ms";
    pub const MODEL_UNCERTAINTY: &str = "model_uncertainty";
    pub const TRAINING_LOSS: &str = "training_loss";
}

/// Mutable performance statistics, updated after every prediction and
/// every outcome. `total_predictions` and `correct_predictions` never
/// decrease.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformanceMetrics {
    /// Number of predictions scored against an outcome.
    pub total_predictions: u64,
    /// Number of scored predictions whose error was below the
    /// correctness threshold.
    pub correct_predictions: u64,
    /// `correct_predictions / total_predictions`, 0 until first outcome.
    pub prediction_accuracy: f64,
    /// EMA of forward-pass latency in milliseconds.
    pub avg_inference_latency_ms: f64,
    /// Uncertainty of the most recent prediction.
    pub model_uncertainty: f64,
    /// EMA of the squared prediction error.
    pub training_loss: f64,
}

impl PerformanceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed forward pass.
    pub fn record_prediction(&mut self, latency_ms: f64, uncertainty: f64) {
        self.avg_inference_latency_ms = if self.avg_inference_latency_ms == 0.0 {
            latency_ms
        } else {
            (1.0 - LATENCY_EMA_ALPHA) * self.avg_inference_latency_ms
                + LATENCY_EMA_ALPHA * latency_ms
        };
        self.model_uncertainty = uncertainty;
    }

    /// Record a scored outcome for an earlier prediction.
    pub fn record_outcome(&mut self, correct: bool, squared_error: f64) {
        self.total_predictions += 1;
        if correct {
            self.correct_predictions += 1;
        }
        self.prediction_accuracy =
            self.correct_predictions as f64 / self.total_predictions as f64;
        self.training_loss =
            (1.0 - LOSS_EMA_ALPHA) * self.training_loss + LOSS_EMA_ALPHA * squared_error;
    }

    /// Export as a name -> value map.
    pub fn as_map(&self) -> HashMap<String, f64> {
        HashMap::from([
            (
                names::TOTAL_PREDICTIONS.to_string(),
                self.total_predictions as f64,
            ),
            (
                names::CORRECT_PREDICTIONS.to_string(),
                self.correct_predictions as f64,
            ),
            (
                names::PREDICTION_ACCURACY.to_string(),
                self.prediction_accuracy,
            ),
            (
                names::AVG_INFERENCE_LATENCY_MS.to_string(),
                self.avg_inference_latency_ms,
            ),
            (names::MODEL_UNCERTAINTY.to_string(), self.model_uncertainty),
            (names::TRAINING_LOSS.to_string(), self.training_loss),
        ])
    }

    /// Reset all metrics (explicit model reset only).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
