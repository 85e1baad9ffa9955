use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Exponential-backoff tuning for transient failures (HTTP 429/5xx and
/// connection errors). Non-transient API failures are never retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    /// Spread sleeps by a per-attempt factor so callers retrying in lockstep
    /// fan out. Deterministic, which keeps the schedule testable.
    #[serde(default = "default_jitter")]
    pub jitter: bool,
}

fn default_max_attempts() -> u32 {
    4
}
fn default_initial_backoff_ms() -> u64 {
    250
}
fn default_max_backoff_ms() -> u64 {
    30_000
}
fn default_multiplier() -> f64 {
    2.0
}
fn default_jitter() -> bool {
    true
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            multiplier: default_multiplier(),
            jitter: default_jitter(),
        }
    }
}

impl RetryPolicy {
    /// Sleep duration before retrying `attempt` (0-indexed: the wait after
    /// the first failure is attempt 0).
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let base_ms = self.initial_backoff_ms as f64 * self.multiplier.powi(attempt as i32);
        let capped_ms = base_ms.min(self.max_backoff_ms as f64);

        let final_ms = if self.jitter {
            // Vary within [0.75, 1.25) of the capped value.
            let factor = 0.75 + (attempt as u64 * 37 % 50) as f64 / 100.0;
            capped_ms * factor
        } else {
            capped_ms
        };

        Duration::from_millis(final_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(jitter: bool) -> RetryPolicy {
        RetryPolicy {
            max_attempts: 4,
            initial_backoff_ms: 100,
            max_backoff_ms: 1_000,
            multiplier: 2.0,
            jitter,
        }
    }

    #[test]
    fn backoff_grows_then_caps() {
        let policy = policy(false);
        assert_eq!(policy.backoff_for_attempt(0), Duration::from_millis(100));
        assert_eq!(policy.backoff_for_attempt(1), Duration::from_millis(200));
        assert_eq!(policy.backoff_for_attempt(2), Duration::from_millis(400));
        // 100 * 2^4 = 1600 > cap
        assert_eq!(policy.backoff_for_attempt(4), Duration::from_millis(1_000));
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let policy = policy(true);
        for attempt in 0..8 {
            let nominal = 100.0 * 2f64.powi(attempt as i32);
            let nominal = nominal.min(1_000.0);
            let actual = policy.backoff_for_attempt(attempt).as_millis() as f64;
            assert!(actual >= nominal * 0.75, "attempt {attempt}: {actual}");
            assert!(actual < nominal * 1.25, "attempt {attempt}: {actual}");
        }
    }
}
