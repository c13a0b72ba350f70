//! Monte Carlo dropout uncertainty estimation.

use rand::rngs::StdRng;

/// Estimates output variance by repeating the forward pass under
/// stochastic dropout. Confidence is reported as `1 - uncertainty`,
/// identically for every output dimension.
#[derive(Debug, Clone)]
pub struct UncertaintyEstimator {
    samples: usize,
}

impl UncertaintyEstimator {
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    /// Run `samples` stochastic passes via `sample` and return the mean
    /// per-dimension population variance, clamped to [0, 1].
    pub fn estimate<F>(&self, rng: &mut StdRng, mut sample: F) -> f64
    where
        F: FnMut(&mut StdRng) -> Vec<f64>,
    {
        let mut outputs: Vec<Vec<f64>> = Vec::with_capacity(self.samples);
        for _ in 0..self.samples {
            outputs.push(sample(rng));
        }

        let dims = match outputs.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return 1.0,
        };
        let n = outputs.len() as f64;

        let mut variance_sum = 0.0;
        for d in 0..dims {
            let mean = outputs.iter().map(|o| o[d]).sum::<f64>() / n;
            let variance = outputs.iter().map(|o| (o[d] - mean).powi(2)).sum::<f64>() / n;
            variance_sum += variance;
        }

        (variance_sum / dims as f64).clamp(0.0, 1.0)
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}
