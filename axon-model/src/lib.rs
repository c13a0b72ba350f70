//! # axon-model
//!
//! The transformer forward pass for network-telemetry prediction.
//!
//! ## Pipeline
//!
//! | Stage | Module |
//! |-------|--------|
//! | Feature + positional encoding | [`encoder`] |
//! | Bounded observation history | [`history`] |
//! | Multi-head scaled dot-product attention | [`attention`] |
//! | Residual + layer norm + feed-forward block | [`block`] |
//! | Task-specific output head | [`head`] |
//! | Monte Carlo dropout uncertainty | [`uncertainty`] |
//! | Attention-weight explanations | [`explain`] |
//!
//! [`stack::TransformerStack`] orchestrates the full pass; parameters live
//! in a flat arena ([`params::ModelParameters`]) so the whole learned state
//! can be exported and replaced as a single vector.

pub mod attention;
pub mod block;
pub mod encoder;
pub mod explain;
pub mod head;
pub mod history;
pub mod params;
pub mod stack;
pub mod uncertainty;

pub use attention::{AttentionOutput, MultiHeadAttention};
pub use encoder::{positional_encoding, FeatureEncoder};
pub use history::ObservationWindow;
pub use params::ModelParameters;
pub use stack::TransformerStack;
pub use uncertainty::UncertaintyEstimator;
