//! Task-specific prediction heads.
//!
//! Dispatch is a pure function of the configured [`ModelVariant`]; no
//! runtime discovery. Head outputs differ only in dimension and squashing:
//! probability-style heads squash with a sigmoid, magnitude-style heads
//! clip at zero, the generic head passes values through.

use axon_core::config::ModelVariant;
use ndarray::Array2;

/// Maps the final transformed sequence to the variant's output vector.
#[derive(Debug, Clone)]
pub struct PredictionHead {
    variant: ModelVariant,
}

impl PredictionHead {
    pub fn new(variant: ModelVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    /// Project a (seq_len x model_dim) sequence to the task output.
    ///
    /// Mean-pools the sequence over positions, compresses the pooled
    /// vector into `output_dim` chunk averages, then applies the variant's
    /// squashing function.
    pub fn project(&self, sequence: &Array2<f64>) -> Vec<f64> {
        let seq_len = sequence.nrows() as f64;
        let model_dim = sequence.ncols();
        let pooled: Vec<f64> = (0..model_dim)
            .map(|col| sequence.column(col).sum() / seq_len)
            .collect();

        let output_dim = self.variant.output_dim();
        let chunk = model_dim.div_ceil(output_dim);
        let compressed: Vec<f64> = (0..output_dim)
            .map(|k| {
                let slice = &pooled[(k * chunk).min(model_dim)..((k + 1) * chunk).min(model_dim)];
                if slice.is_empty() {
                    0.0
                } else {
                    slice.iter().sum::<f64>() / slice.len() as f64
                }
            })
            .collect();

        match self.variant {
            ModelVariant::HandoverPredictor | ModelVariant::AnomalyDetector => {
                compressed.into_iter().map(sigmoid).collect()
            }
            ModelVariant::ResourceOptimizer
            | ModelVariant::TrafficForecaster
            | ModelVariant::EnergyOptimizer => {
                compressed.into_iter().map(|x| x.max(0.0)).collect()
            }
            ModelVariant::GenericPredictor => compressed,
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
