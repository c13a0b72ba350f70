//! Predictor lifecycle states.

use serde::{Deserialize, Serialize};

/// Lifecycle of one predictor instance.
///
/// Construction moves straight from Initialized to Ready. Predicting and
/// Updating are transient within their synchronous calls; Federating is
/// re-entrant and independent of the predict/update cycle. Disposed is
/// terminal and reachable from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictorState {
    Initialized,
    Ready,
    Predicting,
    Updating,
    Federating,
    Disposed,
}

impl PredictorState {
    /// Whether the instance still accepts operations.
    pub fn is_live(self) -> bool {
        self != Self::Disposed
    }
}
