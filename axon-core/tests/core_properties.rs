use axon_core::models::PerformanceMetrics;
use proptest::prelude::*;

proptest! {
    #[test]
    fn counters_are_monotonic_under_any_outcome_sequence(
        outcomes in prop::collection::vec((any::<bool>(), 0.0f64..10.0), 0..64)
    ) {
        let mut metrics = PerformanceMetrics::new();
        let mut last_total = 0;
        let mut last_correct = 0;
        for (correct, squared_error) in outcomes {
            metrics.record_outcome(correct, squared_error);
            prop_assert!(metrics.total_predictions > last_total);
            prop_assert!(metrics.correct_predictions >= last_correct);
            prop_assert!(metrics.correct_predictions <= metrics.total_predictions);
            prop_assert!((0.0..=1.0).contains(&metrics.prediction_accuracy));
            last_total = metrics.total_predictions;
            last_correct = metrics.correct_predictions;
        }
    }

    #[test]
    fn loss_ema_stays_within_observed_error_range(
        errors in prop::collection::vec(0.0f64..1.0, 1..32)
    ) {
        let mut metrics = PerformanceMetrics::new();
        for &e in &errors {
            metrics.record_outcome(false, e);
        }
        let max = errors.iter().cloned().fold(0.0f64, f64::max);
        prop_assert!(metrics.training_loss >= 0.0);
        prop_assert!(metrics.training_loss <= max + 1e-12);
    }
}
