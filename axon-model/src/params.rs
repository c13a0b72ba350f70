//! Flat parameter arena for the transformer stack.
//!
//! One square weight matrix per layer, stored contiguously as an
//! `Array3` indexed by (layer, row, col). The whole learned state can be
//! exported and replaced as a single flat vector, which keeps federated
//! aggregation a plain elementwise average and lets callers snapshot
//! parameters without chasing nested allocations.
//!
//! Attention snapshots (one window x window matrix per layer, written on
//! every deterministic forward pass) live here too but are not part of the
//! learned state: they never enter the flat vector.

use axon_core::errors::FederationError;
use ndarray::{Array2, Array3, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::Rng;

/// Versioned parameter set for one predictor instance.
///
/// Matrix dimensions are fixed for the lifetime of the instance;
/// re-configuring the architecture reinitializes everything.
#[derive(Debug, Clone)]
pub struct ModelParameters {
    model_dim: usize,
    num_layers: usize,
    window: usize,
    version: u64,
    /// Learned layer weights, (layer, model_dim, model_dim).
    layer_weights: Array3<f64>,
    /// Attention snapshots from the most recent deterministic pass,
    /// (layer, window, window). Explainability only.
    attention_snapshots: Array3<f64>,
}

impl ModelParameters {
    /// Initialize with Xavier-style uniform weights from the injected rng.
    pub fn init(model_dim: usize, num_layers: usize, window: usize, rng: &mut StdRng) -> Self {
        let xavier_std = (2.0 / (model_dim + model_dim) as f64).sqrt();
        let layer_weights = Array3::from_shape_fn((num_layers, model_dim, model_dim), |_| {
            rng.gen::<f64>() * xavier_std * 2.0 - xavier_std
        });
        Self {
            model_dim,
            num_layers,
            window,
            version: 0,
            layer_weights,
            attention_snapshots: Array3::zeros((num_layers, window, window)),
        }
    }

    pub fn model_dim(&self) -> usize {
        self.model_dim
    }

    pub fn num_layers(&self) -> usize {
        self.num_layers
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Incremented on every load or adjustment.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of learned parameters (the flat-vector length).
    pub fn len(&self) -> usize {
        self.num_layers * self.model_dim * self.model_dim
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Weight matrix of one layer.
    pub fn layer(&self, layer: usize) -> ArrayView2<'_, f64> {
        self.layer_weights.index_axis(Axis(0), layer)
    }

    /// Store the attention weights produced by one layer's forward pass.
    /// Rows beyond the actual sequence length stay zero.
    pub fn record_attention(&mut self, layer: usize, weights: &Array2<f64>) {
        let mut snapshot = self.attention_snapshots.index_axis_mut(Axis(0), layer);
        snapshot.fill(0.0);
        let rows = weights.nrows().min(self.window);
        let cols = weights.ncols().min(self.window);
        for i in 0..rows {
            for j in 0..cols {
                snapshot[[i, j]] = weights[[i, j]];
            }
        }
    }

    /// Last layer's attention snapshot as rows, for visualization.
    pub fn last_attention(&self) -> Vec<Vec<f64>> {
        let snapshot = self
            .attention_snapshots
            .index_axis(Axis(0), self.num_layers - 1);
        snapshot
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }

    /// Export the learned state as a flat vector, (layer, row, col) order.
    pub fn to_flat_vec(&self) -> Vec<f64> {
        self.layer_weights.iter().copied().collect()
    }

    /// Replace the learned state from a flat vector of matching length.
    pub fn load_flat_vec(&mut self, values: &[f64]) -> Result<(), FederationError> {
        if values.len() != self.len() {
            return Err(FederationError::DimensionMismatch {
                peer: "aggregate".to_string(),
                expected: self.len(),
                got: values.len(),
            });
        }
        for (weight, value) in self.layer_weights.iter_mut().zip(values) {
            *weight = *value;
        }
        self.version += 1;
        Ok(())
    }

    /// Uniformly scale all layer weights (online adjustment step).
    pub fn scale_weights(&mut self, factor: f64) {
        self.layer_weights.mapv_inplace(|w| w * factor);
        self.version += 1;
    }

    /// Resize the attention snapshot buffers for a new context window.
    /// Learned weights are untouched.
    pub fn resize_window(&mut self, window: usize) {
        self.window = window;
        self.attention_snapshots = Array3::zeros((self.num_layers, window, window));
    }
}
