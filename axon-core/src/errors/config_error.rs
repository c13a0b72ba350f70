/// Architecture configuration errors. Fatal at initialization; the
/// predictor is never constructed with an invalid architecture.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("model dimension {model_dim} is not divisible by {num_heads} attention heads")]
    HeadsDoNotDivideDim { model_dim: usize, num_heads: usize },

    #[error("model dimension {model_dim} outside supported range {min}..={max}")]
    DimensionOutOfRange {
        model_dim: usize,
        min: usize,
        max: usize,
    },

    #[error("layer count {num_layers} outside supported range 1..={max}")]
    LayersOutOfRange { num_layers: usize, max: usize },

    #[error("context window {window} outside supported range {min}..={max}")]
    WindowOutOfRange {
        window: usize,
        min: usize,
        max: usize,
    },

    #[error("invalid {name} = {value}: must be within {bounds}")]
    InvalidRate {
        name: &'static str,
        value: f64,
        bounds: &'static str,
    },

    #[error("sample count {samples} must be at least 1")]
    ZeroSamples { samples: usize },

    #[error("failed to parse predictor config: {reason}")]
    Unparseable { reason: String },
}
