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

//! Implementation details for the Google Sheets client library.
//!
//! <div class="warning">
//! All the types, traits, and functions defined in this crate are <b>not</b>
//! intended for general use. This crate will remain unstable for the
//! foreseeable future, even if used in stable client libraries. We (the
//! maintainers) control both and will change both if needed.
//! </div>

/// The HTTP client and request execution loop.
pub mod http;

/// Client configuration types.
pub mod options;

/// Handling of missing path parameters.
pub mod path_parameter;

/// The default implementation for stub methods.
pub mod unimplemented;
