//! One telemetry sample from the network.
//!
//! An [`Observation`] concatenates five fixed sub-metric groups into one
//! feature vector. The order is part of the contract: the encoder, the
//! prediction heads, and the online updater all rely on it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cell-level load and capacity metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CellMetrics {
    /// Fractional cell load in [0, 1].
    pub load: f64,
    /// Downlink throughput in Mbps.
    pub throughput_mbps: f64,
    /// Number of connected devices.
    pub connected_devices: f64,
    /// Spectral efficiency in bits/s/Hz.
    pub spectral_efficiency: f64,
}

/// Aggregated device-side radio metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceMetrics {
    /// Mean received signal strength in dBm.
    pub signal_strength_dbm: f64,
    /// Mean SINR in dB.
    pub sinr_db: f64,
    /// Mean battery level in [0, 1].
    pub battery_level: f64,
    /// Mean device speed in m/s.
    pub mobility_speed_mps: f64,
}

/// Topology metrics for the observed cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopologyMetrics {
    /// Number of neighbor cells.
    pub neighbor_count: f64,
    /// Degree centrality in the cell graph, [0, 1].
    pub degree_centrality: f64,
    /// Mean backhaul link quality, [0, 1].
    pub link_quality: f64,
}

/// Traffic metrics for the observed cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrafficMetrics {
    /// Aggregate traffic volume in Mbps.
    pub volume_mbps: f64,
    /// Number of active flows.
    pub active_flows: f64,
    /// Burstiness index (peak/mean ratio).
    pub burstiness: f64,
}

/// Interference environment metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterferenceMetrics {
    /// Noise floor in dBm.
    pub noise_floor_dbm: f64,
    /// Interference-to-signal ratio, [0, 1].
    pub interference_ratio: f64,
}

/// One telemetry sample. Immutable once created; owned by the predictor's
/// history buffer after ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// When the sample was taken.
    pub timestamp: DateTime<Utc>,
    /// Identifier of the observed cell.
    pub cell_id: String,
    pub cell: CellMetrics,
    pub device: DeviceMetrics,
    pub topology: TopologyMetrics,
    pub traffic: TrafficMetrics,
    pub interference: InterferenceMetrics,
}

impl Observation {
    /// Number of features produced by [`Observation::features`].
    pub const FEATURE_COUNT: usize = 16;

    /// Concatenate all sub-metric groups, in fixed order, into one raw
    /// feature vector: cell, device, topology, traffic, interference.
    pub fn features(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(Self::FEATURE_COUNT);
        out.extend_from_slice(&[
            self.cell.load,
            self.cell.throughput_mbps,
            self.cell.connected_devices,
            self.cell.spectral_efficiency,
        ]);
        out.extend_from_slice(&[
            self.device.signal_strength_dbm,
            self.device.sinr_db,
            self.device.battery_level,
            self.device.mobility_speed_mps,
        ]);
        out.extend_from_slice(&[
            self.topology.neighbor_count,
            self.topology.degree_centrality,
            self.topology.link_quality,
        ]);
        out.extend_from_slice(&[
            self.traffic.volume_mbps,
            self.traffic.active_flows,
            self.traffic.burstiness,
        ]);
        out.extend_from_slice(&[
            self.interference.noise_floor_dbm,
            self.interference.interference_ratio,
        ]);
        out
    }
}

impl Default for Observation {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            cell_id: String::new(),
            cell: CellMetrics::default(),
            device: DeviceMetrics::default(),
            topology: TopologyMetrics::default(),
            traffic: TrafficMetrics::default(),
            interference: InterferenceMetrics::default(),
        }
    }
}
