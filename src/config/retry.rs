//! Retry policy for the remote model backend.
//!
//! Only transient classifier failures (unreachable service, timeouts, 5xx
//! and 429 responses) are retried. The heuristic backend never fails and
//! never consults this policy; its simulated latency is not a retry.
//!
//! ```toml
//! [retry]
//! enabled = true
//! max_retries = 3
//! base_delay_ms = 100
//! strategy = "exponential"
//! timeout_seconds = 30
//! jitter_factor = 0.1
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Retries after the first attempt (default: 3)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    #[serde(default)]
    pub strategy: RetryStrategy,

    /// Give up once this much time has passed since the first attempt (default: 30)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Fraction of the delay added as jitter, 0.0-1.0 (default: 0.1)
    #[serde(default = "default_jitter_factor")]
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            strategy: RetryStrategy::default(),
            timeout_seconds: default_timeout_seconds(),
            jitter_factor: default_jitter_factor(),
        }
    }
}

impl RetryConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn budget(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Delay before retry number `attempt` (1-indexed).
    ///
    /// Never exceeds the overall budget.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.base_delay_ms as f64;
        let step = attempt.max(1);
        let delay_ms = match self.strategy {
            RetryStrategy::Constant => base,
            RetryStrategy::Linear => base * f64::from(step),
            RetryStrategy::Exponential => base * 2.0_f64.powi(step as i32 - 1),
            RetryStrategy::Fibonacci => base * fibonacci(step) as f64,
        };

        // Deterministic half-range jitter keeps retry timing reproducible in tests
        let jittered = delay_ms + delay_ms * self.jitter_factor.clamp(0.0, 1.0) * 0.5;
        let capped = jittered.min(self.budget().as_millis() as f64);
        Duration::from_millis(capped as u64)
    }

    /// Whether another attempt is allowed after `attempt` retries and `elapsed` time.
    pub fn should_retry(&self, attempt: u32, elapsed: Duration) -> bool {
        self.enabled && attempt < self.max_retries && elapsed < self.budget()
    }

    /// Sleep before the next attempt after `retries` retries and `elapsed`
    /// time, or `None` when no attempt is left.
    ///
    /// The delay never runs past what remains of the budget.
    pub fn next_delay(&self, retries: u32, elapsed: Duration) -> Option<Duration> {
        if !self.should_retry(retries, elapsed) {
            return None;
        }
        let remaining = self.budget().saturating_sub(elapsed);
        Some(self.delay_for_attempt(retries + 1).min(remaining))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryStrategy {
    Constant,
    Linear,
    #[default]
    Exponential,
    Fibonacci,
}

/// fib(1) = fib(2) = 1
fn fibonacci(n: u32) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a.saturating_add(b));
    }
    a
}

fn default_enabled() -> bool {
    true
}

fn default_max_retries() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    100
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_jitter_factor() -> f64 {
    0.1
}
