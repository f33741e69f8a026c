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

//! Google Sheets API client library for Rust.
//!
//! Reads and writes Google Sheets.
//!
//! # Quickstart
//!
//! ```no_run
//! # use google_sheets_v4::client::Sheets;
//! # tokio_test::block_on(async {
//! let client = Sheets::builder()
//!     .with_credentials(gax::credentials::Credentials::bearer_token("..."))
//!     .build()
//!     .await?;
//! let values = client
//!     .get_values()
//!     .set_spreadsheet_id("my-spreadsheet-id")
//!     .set_range("Sheet1!A1:B2")
//!     .send()
//!     .await?;
//! for row in &values.body().values {
//!     println!("{row:?}");
//! }
//! # Result::<(), Box<dyn std::error::Error>>::Ok(()) });
//! ```
//!
//! Public spreadsheets can be read with only an API key:
//!
//! ```no_run
//! # use google_sheets_v4::client::Sheets;
//! # tokio_test::block_on(async {
//! let client = Sheets::builder().with_api_key("my-api-key").build().await?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(()) });
//! ```
//!
//! Each client method returns a request builder: set the request fields and
//! any per-call options, then call `.send()` to make the RPC. Nothing is
//! sent until `.send()` is awaited; to run a request in the background,
//! spawn the future on your runtime.

/// The default service endpoint.
const DEFAULT_HOST: &str = "https://sheets.googleapis.com";

pub use gax::Result;
pub use gax::error::Error;

/// The per-RPC request builders.
pub mod builder;

/// The client for the Sheets service.
pub mod client;

/// The messages exchanged with the service.
pub mod model;

/// The traits implemented by the transport and by client mocks.
pub mod stub;

pub(crate) mod tracing;
pub(crate) mod transport;
