//! # axon-learning
//!
//! Online model updating: compare a prediction against its later-observed
//! outcome, maintain accuracy and loss statistics, and adjust parameters
//! only when the error is large enough to matter.

pub mod updater;

pub use updater::{OnlineUpdater, OutcomeReport};
