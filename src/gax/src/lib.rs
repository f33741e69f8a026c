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

//! Shared helpers for the Google Sheets client library.
//!
//! This crate contains the types and functions shared by the Google Sheets
//! client library for Rust: the error model, request and client options, the
//! retry subsystem, and the request parameter encoding helpers. Applications
//! typically use this crate indirectly, through the re-exports and builders
//! in [google-sheets-v4](https://crates.io/crates/google-sheets-v4).

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client.
pub mod error;

/// Client construction: the generic client builder and its configuration.
pub mod client_builder;

/// The credentials seam used to produce authentication headers.
pub mod credentials;

/// Client configuration and per request options.
pub mod options;

/// Response types.
pub mod response;

/// Defines traits for retry policies and some common implementations.
pub mod retry_policy;

/// Retry loop control types.
pub mod retry_result;

/// Throttled-attempt loop control types.
pub mod throttle_result;

/// Defines traits for backoff policies and a common implementation.
pub mod backoff_policy;

/// Truncated exponential backoff with jitter.
pub mod exponential_backoff;

/// Client-side throttling for retry attempts.
pub mod retry_throttler;

#[doc(hidden)]
pub mod retry_loop_internal;

#[doc(hidden)]
pub mod query_parameter;

#[doc(hidden)]
pub mod path_parameter;

#[doc(hidden)]
pub mod request_parameter;
