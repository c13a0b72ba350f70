/// Federated-round errors. Non-fatal: a rejected round is logged and the
/// local parameters are left untouched.
#[derive(Debug, thiserror::Error)]
pub enum FederationError {
    #[error("peer {peer} contributed {got} parameters, local model has {expected}")]
    DimensionMismatch {
        peer: String,
        expected: usize,
        got: usize,
    },

    #[error("{vectors} peer vectors but {weights} aggregation weights")]
    WeightCountMismatch { vectors: usize, weights: usize },

    #[error("negative aggregation weight {weight} for peer {peer}")]
    NegativeWeight { peer: String, weight: f64 },

    #[error("federated round had no usable contributions")]
    EmptyRound,
}
