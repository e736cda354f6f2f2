/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Standard retry strategy
//!
//! A client-wide token bucket limits how many retries can be in flight: every retry withdraws
//! from the bucket and every success refunds it. Within a single operation, attempts back off
//! exponentially.

use smithy_http::operation::Operation;
use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;

/// Retry configuration of a [`Client`](crate::Client)
///
/// ```rust
/// use aws_hyper::RetryConfig;
/// use std::time::Duration;
/// let config = RetryConfig::default()
///     .with_max_attempts(5)
///     .with_max_backoff(Duration::from_secs(5));
/// assert_eq!(config.max_attempts(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct RetryConfig {
    initial_retry_tokens: usize,
    retry_cost: usize,
    no_retry_increment: usize,
    timeout_retry_cost: usize,
    max_attempts: u32,
    max_backoff: Duration,
    base: fn() -> f64,
}

impl RetryConfig {
    /// Total number of attempts, including the initial request
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Size of the token bucket shared by every operation of a client
    pub fn with_initial_retry_tokens(mut self, tokens: usize) -> Self {
        self.initial_retry_tokens = tokens;
        self
    }

    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    /// For deterministic tests, enable using a static base instead of random base for exponential backoff
    pub fn with_static_base(mut self, base: fn() -> f64) -> Self {
        self.base = base;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn initial_retry_tokens(&self) -> usize {
        self.initial_retry_tokens
    }

    pub fn max_backoff(&self) -> Duration {
        self.max_backoff
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_retry_tokens: INITIAL_RETRY_TOKENS,
            retry_cost: RETRY_COST,
            no_retry_increment: 1,
            timeout_retry_cost: 10,
            max_attempts: MAX_ATTEMPTS,
            max_backoff: Duration::from_secs(20),
            // by default, use a random base for exponential backoff
            base: fastrand::f64,
        }
    }
}

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_RETRY_TOKENS: usize = 500;
const RETRY_COST: usize = 5;

/// StandardRetryStrategy
///
/// `ctx` captures cross-request retry state, whereas `attempts` captures retry state local to this
/// request
#[derive(Clone)]
pub(crate) struct StandardRetryStrategy {
    attempts: u32,
    ctx: Arc<Mutex<RetryCtx>>,
}

impl StandardRetryStrategy {
    pub fn new(ctx: Arc<Mutex<RetryCtx>>) -> Self {
        Self { attempts: 0, ctx }
    }

    fn lock(&self) -> MutexGuard<'_, RetryCtx> {
        self.ctx.lock().unwrap()
    }

    /// `Ok(())` records a success. `Err(kind)` asks for another attempt, which is granted when
    /// attempts & retry tokens remain
    pub fn do_retry(&self, retry_kind: Result<(), ErrorKind>) -> Option<(Self, Duration)> {
        let mut ctx = self.lock();
        let err = match retry_kind {
            Ok(_) => {
                ctx.retry_quota_release();
                return None;
            }
            Err(err) => err,
        };
        if self.attempts + 1 >= ctx.config.max_attempts {
            return None;
        }
        if !ctx.get_retry_quota(err) {
            return None;
        }
        // powi saturates to infinity instead of overflowing, and min brings it back in range
        let exponent = self.attempts.min(i32::MAX as u32) as i32;
        let backoff = ((ctx.config.base)() * 2_f64.powi(exponent))
            .min(ctx.config.max_backoff.as_secs_f64());
        Some((self.next_attempt(), Duration::from_secs_f64(backoff)))
    }

    fn next_attempt(&self) -> Self {
        let mut next = self.clone();
        next.attempts += 1;
        next
    }

    /// A server-provided delay, bounded by the attempt limit & the maximum backoff
    fn explicit_retry(&self, delay: Duration) -> Option<(Self, Duration)> {
        let ctx = self.lock();
        if self.attempts + 1 >= ctx.config.max_attempts {
            return None;
        }
        Some((self.next_attempt(), delay.min(ctx.config.max_backoff)))
    }
}

pub(crate) struct RetryCtx {
    retry_quota: usize,
    last_retry: Option<usize>,
    config: RetryConfig,
}

impl RetryCtx {
    pub fn new(config: RetryConfig) -> Self {
        RetryCtx {
            retry_quota: config.initial_retry_tokens,
            last_retry: None,
            config,
        }
    }

    fn retry_quota_release(&mut self) {
        let refund = self
            .last_retry
            .take()
            .unwrap_or(self.config.no_retry_increment);
        self.retry_quota = (self.retry_quota + refund).min(self.config.initial_retry_tokens);
    }

    fn get_retry_quota(&mut self, err: ErrorKind) -> bool {
        let retry_cost = if err == ErrorKind::TransientError {
            self.config.timeout_retry_cost
        } else {
            self.config.retry_cost
        };
        if retry_cost > self.retry_quota {
            false
        } else {
            self.last_retry = Some(retry_cost);
            self.retry_quota -= retry_cost;
            true
        }
    }
}

impl<Handler, R, T, E> tower::retry::Policy<Operation<Handler, R>, SdkSuccess<T>, SdkError<E>>
    for StandardRetryStrategy
where
    E: ProvideErrorKind,
    Handler: Clone,
    R: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
{
    type Future = Pin<Box<dyn Future<Output = Self>>>;

    fn retry(
        &self,
        req: &Operation<Handler, R>,
        result: Result<&SdkSuccess<T>, &SdkError<E>>,
    ) -> Option<Self::Future> {
        if result.is_ok() {
            self.lock().retry_quota_release();
            return None;
        }
        let retry = req.retry_policy().classify(result);
        let (next, delay) = match retry {
            RetryKind::Explicit(delay) => self.explicit_retry(delay),
            RetryKind::NotRetryable => None,
            RetryKind::Error(err) => self.do_retry(Err(err)),
        }?;
        debug!(attempt = next.attempts + 1, delay = ?delay, kind = ?retry, "retrying request");
        let fut = async move {
            tokio::time::sleep(delay).await;
            next
        };
        Some(Box::pin(fut))
    }

    fn clone_request(&self, req: &Operation<Handler, R>) -> Option<Operation<Handler, R>> {
        req.try_clone()
    }
}

#[cfg(test)]
mod test {
    use crate::retry::{RetryConfig, RetryCtx, StandardRetryStrategy};
    use smithy_types::retry::ErrorKind;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn strategy(config: RetryConfig) -> StandardRetryStrategy {
        let ctx = RetryCtx::new(config.with_static_base(|| 1_f64));
        StandardRetryStrategy::new(Arc::new(Mutex::new(ctx)))
    }

    #[test]
    fn eventual_success() {
        let strategy = strategy(RetryConfig::default());
        let (strategy, dur) = strategy
            .do_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(strategy.lock().retry_quota, 495);

        let (strategy, dur) = strategy
            .do_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(2));
        assert_eq!(strategy.lock().retry_quota, 490);

        let no_retry = strategy.do_retry(Ok(()));
        assert!(no_retry.is_none());
        assert_eq!(strategy.lock().retry_quota, 495);
    }

    #[test]
    fn no_more_attempts() {
        let strategy = strategy(RetryConfig::default());
        let (strategy, _) = strategy
            .do_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        let (strategy, _) = strategy
            .do_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(strategy.lock().retry_quota, 490);

        let no_retry = strategy.do_retry(Err(ErrorKind::ServerError));
        assert!(no_retry.is_none());
        assert_eq!(strategy.lock().retry_quota, 490);
    }

    #[test]
    fn transient_errors_cost_more() {
        let strategy = strategy(RetryConfig::default());
        let (strategy, _) = strategy
            .do_retry(Err(ErrorKind::TransientError))
            .expect("should retry");
        assert_eq!(strategy.lock().retry_quota, 490);
        strategy.do_retry(Ok(()));
        assert_eq!(strategy.lock().retry_quota, 500);
    }

    #[test]
    fn successes_never_overfill_the_bucket() {
        let strategy = strategy(RetryConfig::default());
        assert!(strategy.do_retry(Ok(())).is_none());
        assert_eq!(strategy.lock().retry_quota, 500);
    }

    #[test]
    fn no_quota() {
        let strategy = strategy(RetryConfig::default().with_initial_retry_tokens(5));
        let (strategy, dur) = strategy
            .do_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(strategy.lock().retry_quota, 0);
        let no_retry = strategy.do_retry(Err(ErrorKind::ServerError));
        assert!(no_retry.is_none());
        assert_eq!(strategy.lock().retry_quota, 0);
    }

    #[test]
    fn backoff_timing() {
        let mut strategy = strategy(RetryConfig::default().with_max_attempts(5));
        for (expected_secs, expected_quota) in &[(1, 495), (2, 490), (4, 485), (8, 480)] {
            let (next, dur) = strategy
                .do_retry(Err(ErrorKind::ServerError))
                .expect("should retry");
            assert_eq!(dur, Duration::from_secs(*expected_secs));
            assert_eq!(next.lock().retry_quota, *expected_quota);
            strategy = next;
        }

        let no_retry = strategy.do_retry(Err(ErrorKind::ServerError));
        assert!(no_retry.is_none());
        assert_eq!(strategy.lock().retry_quota, 480);
    }

    #[test]
    fn long_retry_chains_stay_within_max_backoff() {
        let mut strategy = strategy(RetryConfig::default().with_max_attempts(60));
        let mut delays = Vec::new();
        while let Some((next, delay)) = strategy.do_retry(Err(ErrorKind::ServerError)) {
            delays.push(delay);
            strategy = next;
        }
        assert_eq!(delays.len(), 59);
        assert!(delays.iter().all(|delay| *delay <= Duration::from_secs(20)));
        assert_eq!(delays.last(), Some(&Duration::from_secs(20)));
        assert_eq!(strategy.lock().retry_quota, 500 - 59 * 5);
    }

    #[test]
    fn max_backoff_time() {
        let mut strategy = strategy(
            RetryConfig::default()
                .with_max_attempts(5)
                .with_max_backoff(Duration::from_secs(3)),
        );
        for expected_secs in &[1, 2, 3, 3] {
            let (next, dur) = strategy
                .do_retry(Err(ErrorKind::ServerError))
                .expect("should retry");
            assert_eq!(dur, Duration::from_secs(*expected_secs));
            strategy = next;
        }
        assert!(strategy.do_retry(Err(ErrorKind::ServerError)).is_none());
    }

    #[test]
    fn explicit_delays_respect_attempts() {
        let strategy = strategy(RetryConfig::default().with_max_backoff(Duration::from_secs(3)));
        let (strategy, dur) = strategy
            .explicit_retry(Duration::from_secs(10))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(3));
        let (strategy, _) = strategy
            .explicit_retry(Duration::from_millis(5))
            .expect("should retry");
        assert!(strategy.explicit_retry(Duration::from_millis(5)).is_none());
        assert_eq!(strategy.lock().retry_quota, 500);
    }
}
