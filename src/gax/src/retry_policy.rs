// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines traits for retry policies and some common implementations.
//!
//! The client library automatically retries RPCs when a retry policy is
//! configured, the RPC fails due to a transient error, and the RPC is
//! idempotent, that is, it is safe to perform the RPC more than once.
//!
//! Applications may override the default behavior and maybe retry operations
//! that, while not safe in general, may be safe given how the application
//! manages its spreadsheets.
//!
//! # Example
//! ```
//! use google_sheets_gax::retry_policy::{Aip194Strict, RetryPolicyExt};
//! use std::time::Duration;
//! let policy = Aip194Strict
//!     .with_time_limit(Duration::from_secs(10))
//!     .with_attempt_limit(3);
//! ```

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use crate::throttle_result::ThrottleResult;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Controls the behavior of the retry loop after an error.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts, including the one that
    ///   just failed.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many
    ///   more errors are retryable on idempotent operations.
    /// * `error` - the last error received. Not all are server errors, the
    ///   client may have been unable to send or complete the RPC.
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// Query the retry policy after a throttled attempt.
    ///
    /// Throttled attempts never reach the service; the policy receives the
    /// previous error and may stop the loop based on attempt count or
    /// elapsed time.
    fn on_throttle(&self, loop_start: Instant, attempt_count: u32, error: Error) -> ThrottleResult {
        let (_, _) = (loop_start, attempt_count);
        ThrottleResult::Continue(error)
    }

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop uses this value to adjust the next RPC
    /// timeout. Policies that are not time based return `None`.
    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        let (_, _) = (loop_start, attempt_count);
        None
    }
}

/// A retry policy that strictly follows [AIP-194].
///
/// This policy must be decorated to limit the number of retry attempts or
/// the duration of the retry loop.
///
/// The policy interprets AIP-194 **strictly**: the retry decision for
/// server-side errors is based only on the status code, and the only
/// retryable status code is `UNAVAILABLE`. Errors created before the request
/// left the client (e.g. transient credential failures) are always safe to
/// retry.
///
/// [AIP-194]: https://google.aip.dev/194
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl RetryPolicy for Aip194Strict {
    fn on_error(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            // The request never left the client, it is safe to retry even
            // non-idempotent operations.
            return RetryResult::Continue(error);
        }
        if let Some(status) = error.status() {
            return if idempotent && status.code == Code::Unavailable {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            };
        }
        if error.is_io() || error.is_timeout() {
            return if idempotent {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            };
        }
        RetryResult::Permanent(error)
    }
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of retry attempts or
/// the duration of the retry loop. It is useful in tests, and in
/// applications that treat all their operations as safe to repeat.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy decorator that limits the total number of attempts.
///
/// Once the maximum attempt count is reached this policy returns
/// [Exhausted][RetryResult::Exhausted]. Before the maximum is reached it
/// returns the result of the inner policy.
#[derive(Clone, Debug)]
pub struct LimitedAttemptCount<P = AlwaysRetry> {
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Limits the retry loop to `maximum_attempts`, retrying all errors
    /// until then.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: AlwaysRetry,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P> {
    /// Decorates `inner` with an attempt limit.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if attempt_count >= self.maximum_attempts {
            return RetryResult::Exhausted(error);
        }
        self.inner
            .on_error(loop_start, attempt_count, idempotent, error)
    }

    fn on_throttle(&self, loop_start: Instant, attempt_count: u32, error: Error) -> ThrottleResult {
        if attempt_count >= self.maximum_attempts {
            return ThrottleResult::Exhausted(error);
        }
        self.inner.on_throttle(loop_start, attempt_count, error)
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

/// A retry policy decorator that limits the duration of the retry loop.
///
/// Once the loop exceeds its duration limit, this policy returns
/// [Exhausted][RetryResult::Exhausted]. Before the deadline is reached it
/// returns the result of the inner policy.
#[derive(Clone, Debug)]
pub struct LimitedElapsedTime<P = AlwaysRetry> {
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Limits the retry loop to `maximum_duration`, retrying all errors
    /// until then.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: AlwaysRetry,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P> {
    /// Decorates `inner` with a time limit.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if loop_start.elapsed() >= self.maximum_duration {
            return RetryResult::Exhausted(error);
        }
        self.inner
            .on_error(loop_start, attempt_count, idempotent, error)
    }

    fn on_throttle(&self, loop_start: Instant, attempt_count: u32, error: Error) -> ThrottleResult {
        if loop_start.elapsed() >= self.maximum_duration {
            return ThrottleResult::Exhausted(error);
        }
        self.inner.on_throttle(loop_start, attempt_count, error)
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        let deadline = loop_start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(Instant::now());
        match self.inner.remaining_time(loop_start, attempt_count) {
            Some(inner) => Some(std::cmp::min(remaining, inner)),
            None => Some(remaining),
        }
    }
}

/// Extension trait to decorate retry policies.
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Limits the total number of attempts.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }

    /// Limits the duration of the retry loop.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }
}

impl<T: RetryPolicy + Sized> RetryPolicyExt for T {}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T: RetryPolicy + 'static> std::convert::From<T> for RetryPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl std::convert::From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Self {
        value.0
    }
}
