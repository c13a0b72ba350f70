//! OnlineUpdater — scores outcomes and conditionally adjusts parameters.
//!
//! Two thresholds govern the update:
//! - error below `correctness_threshold` counts the prediction as correct;
//! - only error above `adjustment_threshold` triggers a parameter
//!   adjustment, so small expected noise never thrashes the weights.
//!
//! The adjustment rule: every layer weight is scaled by
//! `1 - learning_rate * (error - adjustment_threshold)`, with the factor
//! clamped to [0.5, 1.0]. Deterministic, dimension-free, and shrinks
//! activation magnitude in proportion to the excess error.

use axon_core::config::PredictorConfig;
use axon_core::models::{Observation, PerformanceMetrics, Prediction};
use axon_model::ModelParameters;
use tracing::debug;

/// Lower clamp on the multiplicative adjustment factor.
const MIN_ADJUSTMENT_FACTOR: f64 = 0.5;

/// What one outcome did to the model.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeReport {
    /// Normalized prediction error in [0, 1].
    pub error: f64,
    /// Whether the prediction counted as correct.
    pub correct: bool,
    /// Whether a parameter adjustment was applied.
    pub adjusted: bool,
}

/// Compares predictions to observed outcomes and updates running
/// statistics and, conditionally, model parameters.
#[derive(Debug, Clone)]
pub struct OnlineUpdater {
    correctness_threshold: f64,
    adjustment_threshold: f64,
    learning_rate: f64,
}

impl OnlineUpdater {
    pub fn from_config(config: &PredictorConfig) -> Self {
        Self {
            correctness_threshold: config.correctness_threshold,
            adjustment_threshold: config.adjustment_threshold,
            learning_rate: config.learning_rate,
        }
    }

    /// Score an observed outcome against the prediction that preceded it.
    ///
    /// Always increments `total_predictions`; increments
    /// `correct_predictions` when the error is below the correctness
    /// threshold. Degenerate predictions score maximum error and never
    /// trigger an adjustment.
    pub fn record_outcome(
        &self,
        actual: &Observation,
        predicted: &Prediction,
        params: &mut ModelParameters,
        metrics: &mut PerformanceMetrics,
    ) -> OutcomeReport {
        let error = prediction_error(predicted, actual);
        let correct = error < self.correctness_threshold;
        metrics.record_outcome(correct, error * error);

        let adjusted = if !predicted.is_degenerate() && error > self.adjustment_threshold {
            let excess = error - self.adjustment_threshold;
            let factor = (1.0 - self.learning_rate * excess).max(MIN_ADJUSTMENT_FACTOR);
            params.scale_weights(factor);
            debug!(error, factor, version = params.version(), "adjusted parameters");
            true
        } else {
            debug!(error, correct, "outcome within tolerance, parameters unchanged");
            false
        };

        OutcomeReport {
            error,
            correct,
            adjusted,
        }
    }
}

/// Normalized distance between the prediction vector and the outcome's
/// leading features: mean of `|p - a| / (1 + |a|)` over the prediction's
/// dimensions, clamped to [0, 1]. A degenerate (empty) prediction scores
/// the maximum error of 1.
pub fn prediction_error(predicted: &Prediction, actual: &Observation) -> f64 {
    if predicted.output.is_empty() {
        return 1.0;
    }
    let features = actual.features();
    let total: f64 = predicted
        .output
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let a = features.get(i).copied().unwrap_or(0.0);
            (p - a).abs() / (1.0 + a.abs())
        })
        .sum();
    (total / predicted.output.len() as f64).clamp(0.0, 1.0)
}
