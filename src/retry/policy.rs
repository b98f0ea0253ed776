//! Retry Policy Module
//!
//! This module provides the pluggable retry decision used by the high-level
//! client path. The policy is a fixed-delay, bounded-attempt policy with a
//! single decision hook; there is deliberately no exponential curve and no
//! jitter.

use std::time::Duration;

use tokio::time::sleep;

use crate::error::ClientError;
use crate::types::ResponseInfo;

/// Decision hook consulted after each failed attempt.
///
/// Arguments: backoff time already spent, 1-indexed attempt number, and the
/// response descriptor of the failed attempt (`None` when the failure was
/// transport-level and never produced a response). Returns whether another
/// attempt should be made, subject to the policy's retry ceiling.
///
/// A plain `fn` pointer keeps the hook pure by construction: it cannot
/// capture mutable state.
pub type RetryDecision = fn(Duration, u32, Option<&ResponseInfo>) -> bool;

/// Retry policy configuration
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Fixed delay between attempts
    pub delay: Duration,
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,
    /// Decision hook consulted after each failed attempt
    pub decision: RetryDecision,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: crate::defaults::retry::DELAY,
            max_retries: crate::defaults::retry::MAX_RETRIES,
            decision: default_decision,
        }
    }
}

impl RetryPolicy {
    /// Create a new retry policy with the default decision hook
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy that declines every retry.
    ///
    /// This overrides the default pipeline: whatever the ceiling says, the
    /// hook is consulted first and always says stop, so exactly one attempt
    /// is made.
    pub fn never() -> Self {
        Self {
            decision: never_retry,
            ..Self::default()
        }
    }

    /// Set the fixed delay between attempts
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the maximum number of retries
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set a custom decision hook
    pub const fn with_decision(mut self, decision: RetryDecision) -> Self {
        self.decision = decision;
        self
    }

    /// Consult the decision hook for a failed attempt.
    ///
    /// `attempt` is 1-indexed; an attempt number of 0 is outside the hook's
    /// domain and deterministically answers "no retry" without invoking it.
    pub fn decide(
        &self,
        delay_so_far: Duration,
        attempt: u32,
        response: Option<&ResponseInfo>,
    ) -> bool {
        if attempt == 0 {
            return false;
        }
        (self.decision)(delay_so_far, attempt, response)
    }
}

/// Default decision: retry on throttling and temporary server failures.
///
/// This is the documented emulation of the wrapped service's stock handler:
/// HTTP 429, 503 and 504 are considered transient, and so are failures that
/// never produced a response.
fn default_decision(_delay_so_far: Duration, _attempt: u32, response: Option<&ResponseInfo>) -> bool {
    match response {
        None => true,
        Some(info) => matches!(info.status, 429 | 503 | 504),
    }
}

fn never_retry(_delay_so_far: Duration, _attempt: u32, _response: Option<&ResponseInfo>) -> bool {
    false
}

/// Retry executor that drives the attempt loop for one logical call
pub struct RetryExecutor {
    policy: RetryPolicy,
}

impl RetryExecutor {
    /// Create a new retry executor
    pub const fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// The policy this executor runs under
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Execute `operation` once, then retry while the policy consents.
    ///
    /// `ceiling` is a per-call upper bound on additional attempts layered on
    /// the policy's own `max_retries`; the smaller of the two binds. Total
    /// attempts never exceed `min(ceiling, max_retries) + 1`.
    pub async fn run<F, Fut, T>(&self, ceiling: u32, mut operation: F) -> Result<T, ClientError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, ClientError>>,
    {
        let ceiling = ceiling.min(self.policy.max_retries);
        let mut delay_so_far = Duration::ZERO;
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            let error = match operation().await {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            if attempt > ceiling {
                return Err(error);
            }

            let info = error.response_info();
            if !self.policy.decide(delay_so_far, attempt, info.as_ref()) {
                tracing::debug!("retry declined after attempt {attempt}: {error}");
                return Err(error);
            }

            tracing::debug!(
                "attempt {attempt} failed ({error}), retrying in {:?}",
                self.policy.delay
            );
            sleep(self.policy.delay).await;
            delay_so_far += self.policy.delay;
        }
    }
}
