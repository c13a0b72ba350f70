use std::sync::{Arc, Mutex};
use std::time::Duration;

use axon::{
    AttentionKind, AxonError, ModelVariant, Observation, Prediction, PredictorConfig,
    PredictorState, TelemetryPredictor,
};
use chrono::Utc;
use uuid::Uuid;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn small_config() -> PredictorConfig {
    init_tracing();
    PredictorConfig {
        variant: ModelVariant::GenericPredictor,
        model_dim: 8,
        num_heads: 2,
        num_layers: 1,
        context_window: 4,
        mc_samples: 8,
        ..PredictorConfig::default()
    }
}

fn observation_with_magnitude(scale: f64) -> Observation {
    let mut obs = Observation::default();
    obs.cell.load = 0.1 * scale;
    obs.cell.throughput_mbps = 10.0 * scale;
    obs.device.sinr_db = 2.0 * scale;
    obs.traffic.volume_mbps = 5.0 * scale;
    obs
}

#[test]
fn invalid_architecture_is_fatal_at_initialization() {
    let config = PredictorConfig {
        model_dim: 7,
        num_heads: 2,
        ..PredictorConfig::default()
    };
    assert!(matches!(
        TelemetryPredictor::new(config),
        Err(AxonError::Config(_))
    ));
}

#[test]
fn generic_predictor_end_to_end() {
    let mut predictor = TelemetryPredictor::new(small_config()).unwrap();
    predictor
        .configure_attention(AttentionKind::SelfAttention, 4)
        .unwrap();

    for i in 1..=4 {
        predictor.add_observation(observation_with_magnitude(i as f64));
    }

    let prediction = predictor.predict(Duration::from_secs(1));
    assert_eq!(
        prediction.output.len(),
        ModelVariant::GenericPredictor.output_dim()
    );
    assert!(prediction
        .confidence
        .iter()
        .all(|c| (0.0..=1.0).contains(c)));
    assert!((0.0..=1.0).contains(&prediction.uncertainty));
    assert!(prediction.explanation.contains("GenericPredictor"));

    // Last-layer attention rows over the live sequence sum to 1.
    for row in prediction.attention.iter().take(4) {
        let sum: f64 = row.iter().take(4).sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    let metrics = predictor.performance_metrics();
    assert_eq!(metrics["model_uncertainty"], prediction.uncertainty);
}

#[test]
fn empty_history_short_circuits_to_degenerate_result() {
    let mut predictor = TelemetryPredictor::new(small_config()).unwrap();
    let prediction = predictor.predict(Duration::from_secs(1));

    assert!(prediction.is_degenerate());
    assert_eq!(prediction.uncertainty, 1.0);
    assert_eq!(prediction.overall_confidence(), 0.0);
    assert!(prediction.output.is_empty());
    // The stack never ran: the attention snapshots are untouched zeros.
    let attention = predictor.attention_visualization();
    assert!(attention.iter().flatten().all(|&w| w == 0.0));
}

#[test]
fn updating_with_own_prediction_counts_correct_and_keeps_loss_down() {
    let mut predictor = TelemetryPredictor::new(small_config()).unwrap();
    for i in 1..=4 {
        predictor.add_observation(observation_with_magnitude(i as f64));
    }
    let prediction = predictor.predict(Duration::from_secs(1));
    let loss_before = predictor.performance_metrics()["training_loss"];

    // Outcome whose leading features equal the prediction exactly.
    let mut actual = Observation::default();
    actual.cell.load = prediction.output[0];
    actual.cell.throughput_mbps = prediction.output[1];
    actual.cell.connected_devices = prediction.output[2];
    actual.cell.spectral_efficiency = prediction.output[3];

    let report = predictor.update_model(&actual, &prediction).unwrap();
    assert!(report.correct);

    let metrics = predictor.performance_metrics();
    assert_eq!(metrics["total_predictions"], 1.0);
    assert_eq!(metrics["correct_predictions"], 1.0);
    assert!(metrics["training_loss"] <= loss_before);
}

#[test]
fn callback_fires_synchronously_with_every_prediction() {
    let mut predictor = TelemetryPredictor::new(small_config()).unwrap();
    let seen: Arc<Mutex<Vec<Prediction>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    predictor.set_prediction_callback(Box::new(move |p| {
        sink.lock().unwrap().push(p.clone());
    }));

    predictor.add_observation(observation_with_magnitude(1.0));
    let prediction = predictor.predict(Duration::from_secs(2));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].output, prediction.output);
    assert_eq!(seen[0].horizon, Duration::from_secs(2));
}

#[test]
fn federated_update_replaces_parameters_with_peer_average() {
    let mut a = TelemetryPredictor::new(small_config()).unwrap();
    let b = TelemetryPredictor::new(PredictorConfig {
        rng_seed: 99,
        ..small_config()
    })
    .unwrap();

    let before = a.model_parameters();
    let peer = b.model_parameters();
    assert_eq!(before.len(), peer.len());
    assert_ne!(before, peer, "different seeds must give different weights");

    assert!(a.integrate_federated_update(&[peer.clone()], &[1.0]));
    let after = a.model_parameters();
    for ((avg, &local), &remote) in after.iter().zip(&before).zip(&peer) {
        assert!((avg - (local + remote) / 2.0).abs() < 1e-12);
    }
}

#[test]
fn malformed_federated_updates_are_logged_noops() {
    let mut predictor = TelemetryPredictor::new(small_config()).unwrap();
    let before = predictor.model_parameters();

    assert!(!predictor.integrate_federated_update(&[], &[]));
    assert_eq!(predictor.model_parameters(), before);

    let short = vec![0.0; before.len() - 1];
    assert!(!predictor.integrate_federated_update(&[short], &[1.0]));
    assert_eq!(predictor.model_parameters(), before);
}

#[test]
fn federation_rounds_follow_the_configured_period() {
    let mut predictor = TelemetryPredictor::new(small_config()).unwrap();
    assert!(!predictor.federation_due(Utc::now()));

    let node_id = Uuid::new_v4();
    predictor.enable_federated_learning(node_id, Duration::from_secs(60));
    assert!(!predictor.federation_due(Utc::now()));
    assert!(predictor.federation_due(Utc::now() + chrono::Duration::seconds(61)));

    let share = predictor.share();
    assert_eq!(share.node_id, node_id);
    assert_eq!(share.values, predictor.model_parameters());
}

#[test]
fn reconfiguring_attention_resizes_buffers_and_keeps_weights() {
    let mut predictor = TelemetryPredictor::new(small_config()).unwrap();
    for i in 0..4 {
        predictor.add_observation(observation_with_magnitude(i as f64));
    }
    let weights = predictor.model_parameters();

    predictor
        .configure_attention(AttentionKind::SlidingWindow, 2)
        .unwrap();
    assert_eq!(predictor.model_parameters(), weights);
    assert_eq!(predictor.attention_visualization().len(), 2);

    assert!(predictor
        .configure_attention(AttentionKind::SelfAttention, 1)
        .is_err());
}

#[test]
fn disposed_predictor_refuses_all_operations() {
    let mut predictor = TelemetryPredictor::new(small_config()).unwrap();
    predictor.add_observation(observation_with_magnitude(1.0));
    predictor.dispose();
    assert_eq!(predictor.state(), PredictorState::Disposed);

    let prediction = predictor.predict(Duration::from_secs(1));
    assert!(prediction.is_degenerate());

    let actual = Observation::default();
    assert!(predictor.update_model(&actual, &prediction).is_none());

    let before = predictor.model_parameters();
    assert!(!predictor.integrate_federated_update(&[before.clone()], &[1.0]));
    assert_eq!(predictor.model_parameters(), before);
}
