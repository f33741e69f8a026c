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

//! Client-side throttling for retry attempts.
//!
//! Retrying failed requests against an overloaded service can make recovery
//! slower for everybody. Advanced applications may configure a retry
//! throttler to address [cascading failures] and [handle overload]
//! conditions: the retry loop consults the throttler before each retry
//! attempt, and may skip the attempt to shed load.
//!
//! [cascading failures]: https://sre.google/sre-book/addressing-cascading-failures/
//! [handle overload]: https://sre.google/sre-book/handling-overload/

use crate::retry_result::RetryResult;
use rand::Rng;
use std::sync::{Arc, Mutex};

/// The trait implemented by all retry throttlers.
pub trait RetryThrottler: Send + Sync + std::fmt::Debug {
    /// Returns true if the retry loop should skip the next attempt.
    fn throttle_retry_attempt(&self) -> bool;

    /// Reports a failed attempt to the throttler.
    fn on_retry_failure(&mut self, flow: &RetryResult);

    /// Reports a successful attempt to the throttler.
    fn on_success(&mut self);
}

/// The throttler handle shared by the retry loop, client, and options.
pub type SharedRetryThrottler = Arc<Mutex<dyn RetryThrottler>>;

/// Implements adaptive throttling of retry attempts.
///
/// This is the algorithm described in the [Handling Overload] chapter of the
/// Site Reliability Engineering book: the client tracks the number of
/// requests and the number of accepted (successful) requests, and rejects
/// retry attempts with probability
/// `(requests - factor * accepts) / (requests + 1)`.
///
/// With the default factor of `2.0` the throttler only kicks in once more
/// than half the recent requests failed.
///
/// [Handling Overload]: https://sre.google/sre-book/handling-overload/
#[derive(Debug)]
pub struct AdaptiveThrottler {
    factor: f64,
    requests: f64,
    accepts: f64,
}

/// The error type for adaptive throttler creation.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the throttling factor ({0}) should be > 1.0")]
    InvalidFactor(f64),
}

impl AdaptiveThrottler {
    /// Creates a throttler, validating the factor.
    ///
    /// Higher factors make the throttler more tolerant of failures; the
    /// factor must be strictly greater than `1.0` or the throttler would
    /// reject attempts even when all requests succeed.
    pub fn new(factor: f64) -> Result<Self, Error> {
        if factor <= 1.0 {
            return Err(Error::InvalidFactor(factor));
        }
        Ok(Self {
            factor,
            requests: 0.0,
            accepts: 0.0,
        })
    }

    /// Creates a throttler, clamping the factor to a valid value.
    pub fn clamp(factor: f64) -> Self {
        Self {
            factor: factor.max(1.0 + f64::EPSILON),
            requests: 0.0,
            accepts: 0.0,
        }
    }

    fn throttle_probability(&self) -> f64 {
        let p = (self.requests - self.factor * self.accepts) / (self.requests + 1.0);
        p.max(0.0)
    }
}

impl Default for AdaptiveThrottler {
    fn default() -> Self {
        Self::clamp(2.0)
    }
}

impl RetryThrottler for AdaptiveThrottler {
    fn throttle_retry_attempt(&self) -> bool {
        rand::rng().random::<f64>() < self.throttle_probability()
    }

    fn on_retry_failure(&mut self, _flow: &RetryResult) {
        self.requests += 1.0;
    }

    fn on_success(&mut self) {
        self.requests += 1.0;
        self.accepts += 1.0;
    }
}

/// A helper type to use [RetryThrottler] in client and request options.
#[derive(Clone)]
pub struct RetryThrottlerArg(SharedRetryThrottler);

impl<T: RetryThrottler + 'static> std::convert::From<T> for RetryThrottlerArg {
    fn from(value: T) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }
}

impl std::convert::From<SharedRetryThrottler> for RetryThrottlerArg {
    fn from(value: SharedRetryThrottler) -> Self {
        Self(value)
    }
}

impl std::convert::From<RetryThrottlerArg> for SharedRetryThrottler {
    fn from(value: RetryThrottlerArg) -> Self {
        value.0
    }
}
