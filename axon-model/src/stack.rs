//! TransformerStack — orchestrates encoder, blocks, and head for one pass.

use axon_core::config::PredictorConfig;
use axon_core::models::Observation;
use rand::rngs::StdRng;

use crate::attention::MultiHeadAttention;
use crate::block::{DropoutMask, TransformerBlock};
use crate::encoder::FeatureEncoder;
use crate::head::PredictionHead;
use crate::history::ObservationWindow;
use crate::params::ModelParameters;

/// The full forward pass: encode the window, run every configured block,
/// project through the task head.
///
/// The stack holds no learned state; everything learned lives in
/// [`ModelParameters`], which is passed into each call. That split keeps
/// federated parameter replacement a swap on one value.
pub struct TransformerStack {
    encoder: FeatureEncoder,
    attention: MultiHeadAttention,
    head: PredictionHead,
    num_layers: usize,
    dropout_rate: f64,
}

impl TransformerStack {
    pub fn new(config: &PredictorConfig) -> Self {
        Self {
            encoder: FeatureEncoder::new(config.model_dim),
            attention: MultiHeadAttention::new(config.model_dim, config.num_heads),
            head: PredictionHead::new(config.variant),
            num_layers: config.num_layers,
            dropout_rate: config.dropout_rate,
        }
    }

    /// Deterministic forward pass. Records each layer's attention weights
    /// into the parameter set's snapshot buffers for explainability.
    pub fn forward(&self, window: &ObservationWindow, params: &mut ModelParameters) -> Vec<f64> {
        let mut sequence = self.encoder.encode_window(window.iter(), window.len());
        for layer in 0..self.num_layers {
            let weight = params.layer(layer).to_owned();
            let (next, attn_weights) =
                TransformerBlock::forward(&sequence, weight.view(), &self.attention, None);
            params.record_attention(layer, &attn_weights);
            sequence = next;
        }
        self.head.project(&sequence)
    }

    /// Stochastic forward pass for Monte Carlo uncertainty: dropout is
    /// active and no snapshots are written.
    pub fn forward_stochastic(
        &self,
        window: &ObservationWindow,
        params: &ModelParameters,
        rng: &mut StdRng,
    ) -> Vec<f64> {
        let mut sequence = self.encoder.encode_window(window.iter(), window.len());
        for layer in 0..self.num_layers {
            let (next, _) = TransformerBlock::forward(
                &sequence,
                params.layer(layer),
                &self.attention,
                Some(DropoutMask {
                    rng,
                    rate: self.dropout_rate,
                }),
            );
            sequence = next;
        }
        self.head.project(&sequence)
    }

    pub fn num_layers(&self) -> usize {
        self.num_layers
    }
}
