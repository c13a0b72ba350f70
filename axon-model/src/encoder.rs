//! Feature encoding and sinusoidal positional encoding.

use axon_core::constants::POSITIONAL_BASE;
use axon_core::models::Observation;
use ndarray::{Array1, Array2};

/// Deterministic sinusoidal positional encoding.
///
/// For index `i` in `[0, dim)` the encoding is
/// `sin(position / 10000^(i/dim))` for even `i` and `cos(...)` for odd `i`.
/// Pure function: identical inputs yield identical outputs across calls
/// and process restarts.
pub fn positional_encoding(position: usize, dim: usize) -> Vec<f64> {
    (0..dim)
        .map(|i| {
            let angle = position as f64 / POSITIONAL_BASE.powf(i as f64 / dim as f64);
            if i % 2 == 0 {
                angle.sin()
            } else {
                angle.cos()
            }
        })
        .collect()
}

/// Converts a raw observation into a fixed-width model vector.
///
/// Sub-metric groups are concatenated in the order fixed by
/// [`Observation::features`]. A concatenation shorter than `model_dim` is
/// zero-padded; a longer one is silently truncated. Truncation is the
/// documented policy, not an error.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    model_dim: usize,
}

impl FeatureEncoder {
    pub fn new(model_dim: usize) -> Self {
        Self { model_dim }
    }

    /// Encode one observation at the given position within the window.
    pub fn encode(&self, observation: &Observation, position: usize) -> Array1<f64> {
        let mut features = observation.features();
        features.resize(self.model_dim, 0.0);

        let positional = positional_encoding(position, self.model_dim);
        let mut encoded = Array1::from_vec(features);
        for (value, pos) in encoded.iter_mut().zip(positional) {
            *value += pos;
        }
        encoded
    }

    /// Encode a whole window into a (len x model_dim) sequence, positions
    /// assigned oldest-first.
    pub fn encode_window<'a, I>(&self, window: I, len: usize) -> Array2<f64>
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        let mut sequence = Array2::zeros((len, self.model_dim));
        for (position, observation) in window.into_iter().enumerate() {
            sequence
                .row_mut(position)
                .assign(&self.encode(observation, position));
        }
        sequence
    }
}
