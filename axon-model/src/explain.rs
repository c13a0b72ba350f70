//! Human-readable explanations from attention weights.
//!
//! The explanation ranks window positions by how much attention mass the
//! last layer directed at them. Position indices are oldest-first, so the
//! highest index is the most recent observation.

use std::time::Duration;

use axon_core::config::ModelVariant;
use axon_core::constants::EXPLANATION_TOP_K;
use serde::{Deserialize, Serialize};

/// One input position's share of the last layer's attention mass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttentionAttribution {
    /// Position within the window, oldest-first.
    pub position: usize,
    /// Relative contribution in [0, 1].
    pub share: f64,
}

/// Rank window positions by attention column mass, descending, ties broken
/// by original index order. Only positions within `seq_len` are considered;
/// snapshot rows beyond the live sequence are zero-filled padding.
pub fn top_positions(attention: &[Vec<f64>], seq_len: usize, k: usize) -> Vec<AttentionAttribution> {
    let mut mass = vec![0.0; seq_len];
    for row in attention.iter().take(seq_len) {
        for (j, &w) in row.iter().take(seq_len).enumerate() {
            mass[j] += w;
        }
    }
    let total: f64 = mass.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut ranked: Vec<AttentionAttribution> = mass
        .into_iter()
        .enumerate()
        .map(|(position, m)| AttentionAttribution {
            position,
            share: m / total,
        })
        .collect();
    // Stable sort keeps ties in original index order.
    ranked.sort_by(|a, b| b.share.partial_cmp(&a.share).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(k);
    ranked
}

/// Render the explanation string attached to every live prediction.
pub fn render(
    variant: ModelVariant,
    confidence: f64,
    uncertainty: f64,
    horizon: Duration,
    attention: &[Vec<f64>],
    seq_len: usize,
) -> String {
    let mut text = format!(
        "{variant} forecast over {horizon:?}: confidence {:.1}%, uncertainty {:.1}%.",
        confidence * 100.0,
        uncertainty * 100.0,
    );

    let ranked = top_positions(attention, seq_len, EXPLANATION_TOP_K);
    if !ranked.is_empty() {
        let listed: Vec<String> = ranked
            .iter()
            .map(|a| format!("position {} ({:.1}%)", a.position, a.share * 100.0))
            .collect();
        text.push_str(&format!(
            " Most influential observations: {}.",
            listed.join(", ")
        ));
    }
    text
}
