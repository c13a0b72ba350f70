//! Multi-head scaled dot-product attention over the observation window.

use ndarray::{s, Array1, Array2};

/// Output of one attention pass: the transformed sequence plus the
/// head-averaged attention weight matrix.
#[derive(Debug, Clone)]
pub struct AttentionOutput {
    /// Transformed sequence, same shape as the input.
    pub sequence: Array2<f64>,
    /// Attention weights, (seq_len x seq_len). Each row sums to 1.
    pub weights: Array2<f64>,
}

/// Scaled dot-product attention split across `num_heads` parallel heads,
/// each owning a `model_dim / num_heads` slice of the model dimension.
/// Divisibility is enforced by config validation before construction.
#[derive(Debug, Clone)]
pub struct MultiHeadAttention {
    num_heads: usize,
    head_dim: usize,
    scale: f64,
}

impl MultiHeadAttention {
    pub fn new(model_dim: usize, num_heads: usize) -> Self {
        let head_dim = model_dim / num_heads;
        Self {
            num_heads,
            head_dim,
            scale: (head_dim as f64).sqrt(),
        }
    }

    /// Attend queries over keys/values. All three sequences must have the
    /// same length and width; in self-attention they are the same sequence.
    pub fn forward(
        &self,
        queries: &Array2<f64>,
        keys: &Array2<f64>,
        values: &Array2<f64>,
    ) -> AttentionOutput {
        let seq_len = queries.nrows();
        let model_dim = queries.ncols();
        let mut sequence = Array2::zeros((seq_len, model_dim));
        let mut weights = Array2::zeros((seq_len, seq_len));

        for head in 0..self.num_heads {
            let cols = head * self.head_dim..(head + 1) * self.head_dim;
            let q = queries.slice(s![.., cols.clone()]);
            let k = keys.slice(s![.., cols.clone()]);
            let v = values.slice(s![.., cols.clone()]);

            for i in 0..seq_len {
                let scores: Vec<f64> = (0..seq_len)
                    .map(|j| q.row(i).dot(&k.row(j)) / self.scale)
                    .collect();
                let row_weights = softmax(&scores);

                let mut aggregated = Array1::zeros(self.head_dim);
                for (j, &w) in row_weights.iter().enumerate() {
                    aggregated = aggregated + v.row(j).to_owned() * w;
                    weights[[i, j]] += w / self.num_heads as f64;
                }
                sequence
                    .slice_mut(s![i, cols.clone()])
                    .assign(&aggregated);
            }
        }

        AttentionOutput { sequence, weights }
    }
}

/// Numerically stable softmax: subtract the row maximum before
/// exponentiating, then normalize by the row sum.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|&s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
