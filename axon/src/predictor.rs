//! TelemetryPredictor — the public operation surface.
//!
//! One instance is logically single-threaded: every operation takes
//! `&mut self`, so the exclusive borrow is the exclusive lock required
//! around parameter reads and writes. A host sharing an instance across
//! threads wraps it in a `Mutex`; no internal locking exists. All
//! operations are bounded by the fixed window and layer count and
//! terminate in bounded time.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use axon_core::config::{AttentionKind, FederationConfig, PredictorConfig};
use axon_core::models::{Observation, PerformanceMetrics, Prediction};
use axon_core::AxonResult;
use axon_federation::{FederatedAggregator, ParameterShare, RoundSchedule};
use axon_learning::{OnlineUpdater, OutcomeReport};
use axon_model::{
    explain, ModelParameters, ObservationWindow, TransformerStack, UncertaintyEstimator,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::state::PredictorState;

/// Callback invoked synchronously with every produced prediction.
pub type PredictionCallback = Box<dyn Fn(&Prediction) + Send>;

/// A transformer-based predictor over a sliding window of network
/// observations, with online updating and federated parameter exchange.
pub struct TelemetryPredictor {
    config: PredictorConfig,
    federation: FederationConfig,
    state: PredictorState,
    window: ObservationWindow,
    params: ModelParameters,
    stack: TransformerStack,
    estimator: UncertaintyEstimator,
    updater: OnlineUpdater,
    aggregator: FederatedAggregator,
    schedule: Option<RoundSchedule>,
    metrics: PerformanceMetrics,
    rng: StdRng,
    callback: Option<PredictionCallback>,
}

impl TelemetryPredictor {
    /// Initialize a predictor. Fatal `ConfigError` if the architecture is
    /// invalid; no instance is constructed in that case.
    pub fn new(config: PredictorConfig) -> AxonResult<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.rng_seed);
        let params = ModelParameters::init(
            config.model_dim,
            config.num_layers,
            config.context_window,
            &mut rng,
        );
        let federation = FederationConfig::default();
        info!(
            variant = %config.variant,
            model_dim = config.model_dim,
            num_heads = config.num_heads,
            num_layers = config.num_layers,
            "initialized predictor"
        );
        Ok(Self {
            stack: TransformerStack::new(&config),
            estimator: UncertaintyEstimator::new(config.mc_samples),
            updater: OnlineUpdater::from_config(&config),
            aggregator: FederatedAggregator::from_config(&federation),
            window: ObservationWindow::new(config.context_window),
            schedule: None,
            metrics: PerformanceMetrics::new(),
            callback: None,
            state: PredictorState::Ready,
            params,
            federation,
            rng,
            config,
        })
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    pub fn state(&self) -> PredictorState {
        self.state
    }

    /// Reconfigure the attention kind and context window. Resizes the
    /// history buffer and attention snapshots; learned weights survive.
    pub fn configure_attention(
        &mut self,
        kind: AttentionKind,
        context_window: usize,
    ) -> AxonResult<()> {
        PredictorConfig::validate_window(context_window)?;
        self.config.attention = kind;
        self.config.context_window = context_window;
        self.window.set_capacity(context_window);
        self.params.resize_window(context_window);
        debug!(?kind, context_window, "reconfigured attention");
        Ok(())
    }

    /// Push an observation into history, evicting the oldest when full.
    pub fn add_observation(&mut self, observation: Observation) {
        if !self.state.is_live() {
            return;
        }
        if self.window.push(observation).is_some() {
            debug!(capacity = self.window.capacity(), "evicted oldest observation");
        }
    }

    /// Generate a prediction for the requested horizon.
    ///
    /// With no observations buffered this short-circuits to a degenerate
    /// result (uncertainty 1.0, confidence 0.0, empty output) without
    /// running the transformer stack.
    pub fn predict(&mut self, horizon: Duration) -> Prediction {
        if !self.state.is_live() {
            return Prediction::degenerate(self.config.variant, horizon);
        }
        if self.window.is_empty() {
            let prediction = Prediction::degenerate(self.config.variant, horizon);
            self.metrics.record_prediction(0.0, prediction.uncertainty);
            self.emit(&prediction);
            return prediction;
        }

        self.state = PredictorState::Predicting;
        let started = Instant::now();

        let output = self.stack.forward(&self.window, &mut self.params);

        let (stack, window, params) = (&self.stack, &self.window, &self.params);
        let uncertainty = self
            .estimator
            .estimate(&mut self.rng, |rng| {
                stack.forward_stochastic(window, params, rng)
            });
        let confidence = 1.0 - uncertainty;
        let attention = self.params.last_attention();
        let explanation = explain::render(
            self.config.variant,
            confidence,
            uncertainty,
            horizon,
            &attention,
            self.window.len(),
        );

        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
        self.metrics.record_prediction(latency_ms, uncertainty);
        self.state = PredictorState::Ready;

        let prediction = Prediction {
            variant: self.config.variant,
            confidence: vec![confidence; output.len()],
            output,
            uncertainty,
            horizon,
            attention,
            explanation,
            generated_at: Utc::now(),
        };
        self.emit(&prediction);
        prediction
    }

    /// Score an observed outcome against an earlier prediction, updating
    /// metrics and, when the error is large enough, the parameters.
    pub fn update_model(
        &mut self,
        actual: &Observation,
        previous: &Prediction,
    ) -> Option<OutcomeReport> {
        if !self.state.is_live() {
            return None;
        }
        self.state = PredictorState::Updating;
        let report =
            self.updater
                .record_outcome(actual, previous, &mut self.params, &mut self.metrics);
        self.state = PredictorState::Ready;
        Some(report)
    }

    /// Enable federated learning under the given node identity and
    /// aggregation period. The host scheduler drives the timer and calls
    /// [`Self::federation_due`] / [`Self::integrate_federated_update`].
    pub fn enable_federated_learning(&mut self, node_id: Uuid, aggregation_period: Duration) {
        self.federation.enabled = true;
        self.federation.node_id = node_id;
        self.federation.aggregation_period = aggregation_period;
        self.aggregator = FederatedAggregator::from_config(&self.federation);
        self.schedule = Some(RoundSchedule::new(aggregation_period, Utc::now()));
        info!(%node_id, ?aggregation_period, "federated learning enabled");
    }

    /// Whether a federated round is due at `now`.
    pub fn federation_due(&self, now: DateTime<Utc>) -> bool {
        self.schedule.as_ref().is_some_and(|s| s.due(now))
    }

    /// Export the learned parameters as a flat vector for transmission.
    pub fn model_parameters(&self) -> Vec<f64> {
        self.params.to_flat_vec()
    }

    /// This node's parameter contribution for the current round.
    pub fn share(&self) -> ParameterShare {
        ParameterShare {
            node_id: self.federation.node_id,
            version: self.params.version(),
            values: self.params.to_flat_vec(),
        }
    }

    /// Merge peer parameter vectors into the local set by weighted
    /// average. A mismatched or empty round is a logged no-op; returns
    /// whether the round was applied.
    pub fn integrate_federated_update(
        &mut self,
        peer_vectors: &[Vec<f64>],
        peer_weights: &[f64],
    ) -> bool {
        if !self.state.is_live() {
            return false;
        }
        let previous = self.state;
        self.state = PredictorState::Federating;
        let applied = match self
            .aggregator
            .integrate(&mut self.params, peer_vectors, peer_weights)
        {
            Ok(()) => {
                if let Some(schedule) = self.schedule.as_mut() {
                    schedule.mark_completed(Utc::now());
                }
                true
            }
            Err(error) => {
                warn!(%error, "federated update rejected, parameters unchanged");
                false
            }
        };
        self.state = previous;
        applied
    }

    /// Current performance metrics as a name -> value map.
    pub fn performance_metrics(&self) -> HashMap<String, f64> {
        self.metrics.as_map()
    }

    /// Last-layer attention weights from the most recent forward pass.
    pub fn attention_visualization(&self) -> Vec<Vec<f64>> {
        self.params.last_attention()
    }

    /// Register a callback invoked synchronously with every prediction
    /// immediately after it is produced.
    pub fn set_prediction_callback(&mut self, callback: PredictionCallback) {
        self.callback = Some(callback);
    }

    /// Clear history and metrics; learned parameters survive.
    pub fn reset(&mut self) {
        self.window.clear();
        self.metrics.reset();
    }

    /// Terminal state: all further operations become no-ops.
    pub fn dispose(&mut self) {
        self.state = PredictorState::Disposed;
        self.callback = None;
        info!("predictor disposed");
    }

    fn emit(&self, prediction: &Prediction) {
        if let Some(callback) = &self.callback {
            callback(prediction);
        }
    }
}

impl std::fmt::Debug for TelemetryPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryPredictor")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("window_len", &self.window.len())
            .field("param_version", &self.params.version())
            .finish()
    }
}
