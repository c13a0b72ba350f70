//! Data models shared across the workspace.

pub mod metrics;
pub mod observation;
pub mod prediction;

pub use metrics::PerformanceMetrics;
pub use observation::{
    CellMetrics, DeviceMetrics, InterferenceMetrics, Observation, TopologyMetrics, TrafficMetrics,
};
pub use prediction::Prediction;
