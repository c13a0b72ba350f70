//! # axon-federation
//!
//! Parameter exchange between peer predictor instances: flat-vector
//! export, weighted-average integration with reject-and-log validation,
//! and a fixed-period round schedule driven by the host's timer.

pub mod aggregator;
pub mod schedule;

pub use aggregator::{FederatedAggregator, ParameterShare};
pub use schedule::RoundSchedule;
