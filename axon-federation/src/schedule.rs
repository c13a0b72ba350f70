//! Fixed-period federated round scheduling.
//!
//! The host scheduler owns the actual timer; this type only answers
//! "is a round due" against the configured period and counts completed
//! rounds.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Tracks when the next federated aggregation round is due.
#[derive(Debug, Clone)]
pub struct RoundSchedule {
    period: Duration,
    last_round_at: DateTime<Utc>,
    rounds_completed: u64,
}

impl RoundSchedule {
    /// Start the schedule at `enabled_at`; the first round is due one full
    /// period later.
    pub fn new(period: Duration, enabled_at: DateTime<Utc>) -> Self {
        Self {
            period,
            last_round_at: enabled_at,
            rounds_completed: 0,
        }
    }

    /// Whether a round is due at `now`.
    pub fn due(&self, now: DateTime<Utc>) -> bool {
        let elapsed = now.signed_duration_since(self.last_round_at);
        match chrono::Duration::from_std(self.period) {
            Ok(period) => elapsed >= period,
            // Period overflows chrono's range; treat as never due.
            Err(_) => false,
        }
    }

    /// Mark a round completed at `now`, resetting the period.
    pub fn mark_completed(&mut self, now: DateTime<Utc>) {
        self.last_round_at = now;
        self.rounds_completed += 1;
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn rounds_completed(&self) -> u64 {
        self.rounds_completed
    }
}
