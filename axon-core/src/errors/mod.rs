//! Error taxonomy for the Axon predictor.
//!
//! Only configuration errors are fatal. Runtime conditions (empty history,
//! rejected federated updates, numeric edge cases) degrade to low-confidence
//! or no-op outcomes so the enclosing control loop never stalls.

pub mod config_error;
pub mod federation_error;

pub use config_error::ConfigError;
pub use federation_error::FederationError;

/// Top-level error type composing all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum AxonError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Federation(#[from] FederationError),
}

/// Convenience result alias used across the workspace.
pub type AxonResult<T> = Result<T, AxonError>;
