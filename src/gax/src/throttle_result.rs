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

//! Control types for throttled retry attempts.

use crate::error::Error;

/// The result of a retry policy decision after a throttled attempt.
///
/// Throttled attempts never reach the service, so the policy receives the
/// previous error again and decides whether to keep the loop alive.
#[derive(Debug)]
pub enum ThrottleResult {
    /// The policy is stopping the loop.
    Exhausted(Error),

    /// Continue the loop, the attempt does not count against time or attempt
    /// limits beyond what the policy already recorded.
    Continue(Error),
}

impl ThrottleResult {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}
