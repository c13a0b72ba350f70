use axon_core::models::Observation;
use axon_model::attention::softmax;
use axon_model::block::layer_norm_rows;
use axon_model::{positional_encoding, ObservationWindow};
use ndarray::Array2;
use proptest::prelude::*;

proptest! {
    #[test]
    fn softmax_rows_always_sum_to_one(
        scores in prop::collection::vec(-100.0f64..100.0, 1..16)
    ) {
        let weights = softmax(&scores);
        let sum: f64 = weights.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
        prop_assert!(weights.iter().all(|&w| (0.0..=1.0).contains(&w)));
    }

    #[test]
    fn positional_encoding_is_pure_and_bounded(
        position in 0usize..512,
        dim in 1usize..128,
    ) {
        let a = positional_encoding(position, dim);
        let b = positional_encoding(position, dim);
        prop_assert_eq!(&a, &b);
        prop_assert!(a.iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn window_length_is_bounded_by_capacity(
        capacity in 1usize..16,
        pushes in 0usize..64,
    ) {
        let mut window = ObservationWindow::new(capacity);
        for i in 0..pushes {
            let evicted = window.push(Observation {
                cell_id: i.to_string(),
                ..Observation::default()
            });
            prop_assert!(window.len() <= capacity);
            // Eviction happens exactly when the buffer was already full.
            prop_assert_eq!(evicted.is_some(), i >= capacity);
        }
        // FIFO: the survivors are the most recent `capacity` pushes.
        if pushes >= capacity {
            let first_kept = pushes - capacity;
            let ids: Vec<String> = window.iter().map(|o| o.cell_id.clone()).collect();
            let expected: Vec<String> = (first_kept..pushes).map(|i| i.to_string()).collect();
            prop_assert_eq!(ids, expected);
        }
    }

    #[test]
    fn layer_norm_output_has_standard_moments(
        raw in prop::collection::vec(-1000.0f64..1000.0, 4..32)
    ) {
        let dim = raw.len();
        let raw_mean: f64 = raw.iter().sum::<f64>() / dim as f64;
        let raw_variance: f64 =
            raw.iter().map(|x| (x - raw_mean).powi(2)).sum::<f64>() / dim as f64;
        // Keep the input variance well above the layer-norm epsilon so the
        // normalized variance lands at 1 within tolerance.
        prop_assume!(raw_variance > 0.01);

        let mut rows = Array2::from_shape_vec((1, dim), raw).unwrap();
        layer_norm_rows(&mut rows);

        let mean: f64 = rows.row(0).sum() / dim as f64;
        let variance: f64 = rows.row(0).iter().map(|x| (x - mean).powi(2)).sum::<f64>() / dim as f64;
        prop_assert!(mean.abs() < 1e-9, "mean = {}", mean);
        prop_assert!((variance - 1.0).abs() < 1e-3, "variance = {}", variance);
    }
}
