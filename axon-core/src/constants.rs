/// Axon system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Epsilon added to the variance denominator during layer normalization.
pub const LAYER_NORM_EPSILON: f64 = 1e-6;

/// Base of the sinusoidal positional encoding frequency ladder.
pub const POSITIONAL_BASE: f64 = 10_000.0;

/// Tolerance when asserting that attention rows sum to 1.
pub const ATTENTION_ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Default number of stochastic forward passes for uncertainty estimation.
pub const DEFAULT_MC_SAMPLES: usize = 50;

/// Default fraction of feed-forward activations zeroed per stochastic pass.
pub const DEFAULT_DROPOUT_RATE: f64 = 0.1;

/// Prediction error below this counts as a correct prediction.
pub const DEFAULT_CORRECTNESS_THRESHOLD: f64 = 0.1;

/// Prediction error above this triggers a parameter adjustment.
pub const DEFAULT_ADJUSTMENT_THRESHOLD: f64 = 0.05;

/// Default step size for the online parameter adjustment.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Smoothing factor for the training-loss exponential moving average.
pub const LOSS_EMA_ALPHA: f64 = 0.1;

/// Smoothing factor for the inference-latency exponential moving average.
pub const LATENCY_EMA_ALPHA: f64 = 0.2;

/// Supported model dimension range.
pub const MIN_MODEL_DIM: usize = 4;
pub const MAX_MODEL_DIM: usize = 512;

/// Supported layer count range.
pub const MAX_NUM_LAYERS: usize = 8;

/// Supported context window range.
pub const MIN_CONTEXT_WINDOW: usize = 2;
pub const MAX_CONTEXT_WINDOW: usize = 256;

/// Number of top attention positions reported in an explanation.
pub const EXPLANATION_TOP_K: usize = 3;
