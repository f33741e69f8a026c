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

use std::sync::Arc;

/// Implements a client for the Google Sheets API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_sheets_v4::client::Sheets;
/// let client = Sheets::builder().build().await?;
/// // use `client` to make requests to the Google Sheets API.
/// # Result::<(), Box<dyn std::error::Error>>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Reads and writes Google Sheets.
///
/// # Configuration
///
/// To configure `Sheets` use the `with_*` methods in the type returned by
/// [builder()][Sheets::builder]. The default configuration should work for
/// most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default
///   endpoint (`https://sheets.googleapis.com`).
/// * [with_credentials()]: the requests are unauthenticated by default;
///   applications using OAuth2 tokens configure them here.
/// * [with_api_key()] and [with_quota_user()]: client-level defaults merged
///   into every request.
/// * [with_retry_policy()]: without a retry policy every request is
///   attempted exactly once.
///
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
/// [with_api_key()]: gax::client_builder::ClientBuilder::with_api_key
/// [with_quota_user()]: gax::client_builder::ClientBuilder::with_quota_user
/// [with_retry_policy()]: gax::client_builder::ClientBuilder::with_retry_policy
///
/// # Pooling and Cloning
///
/// `Sheets` holds a connection pool internally, it is advised to create one
/// and then reuse it. You do not need to wrap `Sheets` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally. The client is safe for concurrent use from multiple tasks;
/// its configuration is immutable after construction.
#[derive(Clone, Debug)]
pub struct Sheets {
    inner: Arc<dyn crate::stub::dynamic::Sheets>,
}

impl Sheets {
    /// Returns a builder for [Sheets].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_sheets_v4::client::Sheets;
    /// let client = Sheets::builder().build().await?;
    /// # Result::<(), Box<dyn std::error::Error>>::Ok(()) });
    /// ```
    pub fn builder() -> crate::builder::sheets::ClientBuilder {
        gax::client_builder::internal::new_builder(crate::builder::sheets::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking
    /// the client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::Sheets + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Arc<dyn crate::stub::dynamic::Sheets>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(Arc::new(crate::tracing::Sheets::new(conf).await?));
        }
        Ok(Arc::new(crate::transport::Sheets::new(conf).await?))
    }

    /// Creates a spreadsheet, returning the newly created spreadsheet.
    ///
    /// ```no_run
    /// # use google_sheets_v4::{client::Sheets, model};
    /// # async fn sample(client: &Sheets) -> google_sheets_v4::Result<()> {
    /// let created = client
    ///     .create_spreadsheet()
    ///     .set_spreadsheet(model::Spreadsheet::new().set_properties(
    ///         model::SpreadsheetProperties::new().set_title("Expenses"),
    ///     ))
    ///     .send()
    ///     .await?;
    /// println!("created {:?}", created.body().spreadsheet_id);
    /// # Ok(()) }
    /// ```
    pub fn create_spreadsheet(&self) -> crate::builder::sheets::CreateSpreadsheet {
        crate::builder::sheets::CreateSpreadsheet::new(self.inner.clone())
    }

    /// Returns the spreadsheet at the given ID.
    ///
    /// By default, data within grids is not returned. You can include grid
    /// data in one of two ways: specify a field mask with
    /// [with_fields][gax::options::RequestOptionsBuilder::with_fields], or
    /// set [set_include_grid_data][crate::builder::sheets::GetSpreadsheet::set_include_grid_data].
    /// If a field mask is set, the `includeGridData` parameter is ignored.
    ///
    /// To retrieve only subsets of the spreadsheet, use
    /// [set_ranges][crate::builder::sheets::GetSpreadsheet::set_ranges].
    /// Ranges are specified using A1 notation.
    pub fn get_spreadsheet(&self) -> crate::builder::sheets::GetSpreadsheet {
        crate::builder::sheets::GetSpreadsheet::new(self.inner.clone())
    }

    /// Applies one or more updates to the spreadsheet.
    ///
    /// Each request is validated before being applied. If any request is
    /// not valid then the entire request fails and nothing is applied: the
    /// updates are atomic.
    ///
    /// Some requests have replies to give you some information about how
    /// they are applied. The replies mirror the requests: if you applied 4
    /// updates and the 3rd one had a reply, then the response has 2 empty
    /// replies, the actual reply, and another empty reply, in that order.
    pub fn batch_update_spreadsheet(&self) -> crate::builder::sheets::BatchUpdateSpreadsheet {
        crate::builder::sheets::BatchUpdateSpreadsheet::new(self.inner.clone())
    }

    /// Sets values in a range of a spreadsheet.
    ///
    /// The caller must specify the spreadsheet ID, the range, and a value
    /// input option.
    pub fn update_values(&self) -> crate::builder::sheets::UpdateValues {
        crate::builder::sheets::UpdateValues::new(self.inner.clone())
    }

    /// Returns a range of values from a spreadsheet.
    ///
    /// The caller must specify the spreadsheet ID and a range.
    pub fn get_values(&self) -> crate::builder::sheets::GetValues {
        crate::builder::sheets::GetValues::new(self.inner.clone())
    }

    /// Returns one or more ranges of values from a spreadsheet.
    ///
    /// The caller must specify the spreadsheet ID and one or more ranges.
    pub fn batch_get_values(&self) -> crate::builder::sheets::BatchGetValues {
        crate::builder::sheets::BatchGetValues::new(self.inner.clone())
    }

    /// Sets values in one or more ranges of a spreadsheet.
    ///
    /// The caller must specify the spreadsheet ID, a value input option, and
    /// one or more value ranges.
    pub fn batch_update_values(&self) -> crate::builder::sheets::BatchUpdateValues {
        crate::builder::sheets::BatchUpdateValues::new(self.inner.clone())
    }

    /// Copies a single sheet from a spreadsheet to another spreadsheet.
    ///
    /// Returns the properties of the newly created sheet.
    pub fn copy_sheet(&self) -> crate::builder::sheets::CopySheet {
        crate::builder::sheets::CopySheet::new(self.inner.clone())
    }
}
