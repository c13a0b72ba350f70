//! One transformer block: attention, residuals, layer norm, feed-forward.

use axon_core::constants::LAYER_NORM_EPSILON;
use ndarray::{Array2, ArrayView2};
use rand::rngs::StdRng;
use rand::Rng;

use crate::attention::MultiHeadAttention;

/// Dropout applied to feed-forward activations during stochastic passes.
/// `None` for the deterministic pass that produces the reported prediction.
pub struct DropoutMask<'a> {
    pub rng: &'a mut StdRng,
    pub rate: f64,
}

/// Stateless transformer block. All learned state lives in the layer's
/// weight matrix; the block itself is pure computation.
pub struct TransformerBlock;

impl TransformerBlock {
    /// Forward one block:
    /// attention -> residual -> layer norm -> feed-forward -> residual ->
    /// layer norm. Returns the transformed sequence and the block's
    /// attention weights.
    pub fn forward(
        input: &Array2<f64>,
        weight: ArrayView2<'_, f64>,
        attention: &MultiHeadAttention,
        mut dropout: Option<DropoutMask<'_>>,
    ) -> (Array2<f64>, Array2<f64>) {
        let attended = attention.forward(input, input, input);

        let mut normed = attended.sequence + input;
        layer_norm_rows(&mut normed);

        // Tied-weight feed-forward: expand through W with a ReLU clip,
        // contract back through W^T.
        let mut hidden = normed.dot(&weight);
        hidden.mapv_inplace(|h| h.max(0.0));
        if let Some(mask) = dropout.as_mut() {
            apply_dropout(&mut hidden, mask);
        }
        let projected = hidden.dot(&weight.t());

        let mut output = projected + &normed;
        layer_norm_rows(&mut output);

        (output, attended.weights)
    }
}

/// Normalize each row to mean 0 and variance 1. A fixed epsilon in the
/// denominator absorbs near-zero variance; numeric instability is never
/// surfaced as an error.
pub fn layer_norm_rows(sequence: &mut Array2<f64>) {
    let dim = sequence.ncols() as f64;
    for mut row in sequence.rows_mut() {
        let mean = row.sum() / dim;
        let variance = row.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / dim;
        let denom = (variance + LAYER_NORM_EPSILON).sqrt();
        row.mapv_inplace(|x| (x - mean) / denom);
    }
}

/// Inverted dropout: zero a fraction of activations and rescale the rest
/// so the expected activation is unchanged.
fn apply_dropout(hidden: &mut Array2<f64>, mask: &mut DropoutMask<'_>) {
    let keep = 1.0 - mask.rate;
    for value in hidden.iter_mut() {
        if mask.rng.gen::<f64>() < mask.rate {
            *value = 0.0;
        } else {
            *value /= keep;
        }
    }
}
