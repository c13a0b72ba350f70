//! Weighted-average aggregation of peer parameter vectors.
//!
//! A malformed round (length mismatch, negative weight, nothing to
//! average) is rejected as a whole: the error is logged and the local
//! parameters stay bit-identical. Aggregation never panics the control
//! loop.

use axon_core::config::FederationConfig;
use axon_core::errors::FederationError;
use axon_model::ModelParameters;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// One peer's parameter contribution, as carried by the host transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterShare {
    /// Contributing node.
    pub node_id: Uuid,
    /// Parameter version at the contributor.
    pub version: u64,
    /// Flat parameter vector, (layer, row, col) order.
    pub values: Vec<f64>,
}

impl ParameterShare {
    /// Serialize for the transport channel.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from the transport channel.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Merges peer parameter vectors into the local set.
#[derive(Debug, Clone)]
pub struct FederatedAggregator {
    include_local: bool,
    local_weight: f64,
}

impl FederatedAggregator {
    pub fn from_config(config: &FederationConfig) -> Self {
        Self {
            include_local: config.include_local,
            local_weight: config.local_weight,
        }
    }

    /// Replace the local parameters with the weighted average of the
    /// supplied peer vectors (plus the local vector when configured).
    ///
    /// Validates everything before touching the parameter set, so a
    /// rejected round leaves parameters bit-identical.
    pub fn integrate(
        &self,
        params: &mut ModelParameters,
        peer_vectors: &[Vec<f64>],
        peer_weights: &[f64],
    ) -> Result<(), FederationError> {
        if peer_vectors.is_empty() {
            return Err(FederationError::EmptyRound);
        }
        if peer_vectors.len() != peer_weights.len() {
            return Err(FederationError::WeightCountMismatch {
                vectors: peer_vectors.len(),
                weights: peer_weights.len(),
            });
        }
        let expected = params.len();
        for (index, (vector, &weight)) in peer_vectors.iter().zip(peer_weights).enumerate() {
            if vector.len() != expected {
                return Err(FederationError::DimensionMismatch {
                    peer: format!("peer[{index}]"),
                    expected,
                    got: vector.len(),
                });
            }
            if weight < 0.0 {
                return Err(FederationError::NegativeWeight {
                    peer: format!("peer[{index}]"),
                    weight,
                });
            }
        }

        let local = params.to_flat_vec();
        let mut total_weight: f64 = peer_weights.iter().sum();
        if self.include_local {
            total_weight += self.local_weight;
        }
        if total_weight <= 0.0 {
            return Err(FederationError::EmptyRound);
        }

        let mut averaged = vec![0.0; expected];
        for (vector, &weight) in peer_vectors.iter().zip(peer_weights) {
            for (sum, &value) in averaged.iter_mut().zip(vector) {
                *sum += weight * value;
            }
        }
        if self.include_local {
            for (sum, &value) in averaged.iter_mut().zip(&local) {
                *sum += self.local_weight * value;
            }
        }
        for sum in &mut averaged {
            *sum /= total_weight;
        }

        params.load_flat_vec(&averaged)?;
        debug!(
            peers = peer_vectors.len(),
            version = params.version(),
            "integrated federated round"
        );
        Ok(())
    }

    /// Integrate typed peer shares. Shares with mismatched dimensions are
    /// individually dropped with a warning; the rest still aggregate.
    pub fn integrate_shares(
        &self,
        params: &mut ModelParameters,
        shares: &[ParameterShare],
        weights: &[f64],
    ) -> Result<(), FederationError> {
        if shares.len() != weights.len() {
            return Err(FederationError::WeightCountMismatch {
                vectors: shares.len(),
                weights: weights.len(),
            });
        }
        let expected = params.len();
        let mut vectors = Vec::with_capacity(shares.len());
        let mut kept_weights = Vec::with_capacity(shares.len());
        for (share, &weight) in shares.iter().zip(weights) {
            if share.values.len() != expected {
                warn!(
                    node = %share.node_id,
                    expected,
                    got = share.values.len(),
                    "dropping peer share with mismatched dimensions"
                );
                continue;
            }
            vectors.push(share.values.clone());
            kept_weights.push(weight);
        }
        self.integrate(params, &vectors, &kept_weights)
    }
}
