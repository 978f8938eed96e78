// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Retry policy for transient bridge failures.

use crate::error::BridgeError;
use std::time::Duration;

/// Configuration for retry behavior.
///
/// Attempt numbering is 0-indexed: the delay slept *after* failed attempt
/// `n` is `base_delay * backoff_multiplier^n`, so the defaults produce
/// 100 ms, 200 ms, 400 ms.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Exponential growth factor applied per attempt.
    pub backoff_multiplier: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
            backoff_multiplier: 2,
        }
    }
}

impl RetryConfig {
    /// Backoff delay for the given 0-indexed attempt.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay * self.backoff_multiplier.saturating_pow(attempt)
    }

    /// Decides whether failed attempt `attempt` may be retried, and after
    /// what delay. Returns `None` when the budget is exhausted or the
    /// failure is not transient.
    pub fn decide(&self, attempt: u32, error: &BridgeError) -> Option<Duration> {
        if attempt >= self.max_retries || !error.is_retryable() {
            None
        } else {
            Some(self.delay_for_attempt(attempt))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge(status: u16) -> BridgeError {
        BridgeError::Bridge {
            status,
            endpoint: "/health".into(),
            message: "err".into(),
        }
    }

    #[test]
    fn exponential_delays() {
        let config = RetryConfig::default();
        assert_eq!(config.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(config.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(config.delay_for_attempt(2), Duration::from_millis(400));
    }

    #[test]
    fn decision_table() {
        let config = RetryConfig::default();
        let connect = BridgeError::Connection("refused".into());

        assert_eq!(config.decide(0, &connect), Some(Duration::from_millis(100)));
        assert_eq!(config.decide(2, &bridge(500)), Some(Duration::from_millis(400)));
        assert_eq!(config.decide(1, &bridge(408)), Some(Duration::from_millis(200)));

        // budget exhausted
        assert_eq!(config.decide(3, &connect), None);
        // non-transient failures are never retried, regardless of budget
        assert_eq!(config.decide(0, &bridge(401)), None);
        assert_eq!(config.decide(0, &bridge(404)), None);
        assert_eq!(config.decide(0, &BridgeError::Cancelled), None);
    }
}
