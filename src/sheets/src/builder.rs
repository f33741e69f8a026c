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

pub mod sheets {
    //! The request builders for [Sheets][crate::client::Sheets].
    //!
    //! Each builder holds one request and its per-call options. Set the
    //! request fields and any options, then call `.send()` to make the RPC.
    //! All builders implement
    //! [RequestOptionsBuilder][gax::options::RequestOptionsBuilder] for the
    //! per-call options: `with_fields`, `with_quota_user`, timeouts, and
    //! retry overrides.

    use crate::Result;
    use gax::response::Response;
    use std::sync::Arc;

    /// A builder for [Sheets][crate::client::Sheets].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_sheets_v4::client::Sheets;
    /// let client = Sheets::builder()
    ///     .with_api_key("my-api-key")
    ///     .build()
    ///     .await?;
    /// # Result::<(), Box<dyn std::error::Error>>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gax::credentials::Credentials>;

    pub(crate) mod client {
        use crate::client::Sheets;

        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Sheets;
            type Credentials = gax::credentials::Credentials;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common state for all the request builders: the stub, the request
    /// message, and the per-call options.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::Sheets>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Sheets>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Sheets::create_spreadsheet][crate::client::Sheets::create_spreadsheet] calls.
    #[derive(Clone, Debug)]
    pub struct CreateSpreadsheet(RequestBuilder<crate::model::Spreadsheet>);

    impl CreateSpreadsheet {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Sheets>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the spreadsheet to create, i.e. the request body.
        pub fn set_spreadsheet<T: Into<crate::model::Spreadsheet>>(mut self, v: T) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::Spreadsheet>> {
            (*self.0.stub)
                .create_spreadsheet(self.0.request, self.0.options)
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for CreateSpreadsheet {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sheets::get_spreadsheet][crate::client::Sheets::get_spreadsheet] calls.
    #[derive(Clone, Debug)]
    pub struct GetSpreadsheet(RequestBuilder<crate::model::requests::GetSpreadsheetRequest>);

    impl GetSpreadsheet {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Sheets>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the spreadsheet to request. Required.
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_spreadsheet_id(v);
            self
        }

        /// Sets the ranges to retrieve from the spreadsheet.
        pub fn set_ranges<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request = self.0.request.set_ranges(v);
            self
        }

        /// If true, grid data is returned. Ignored if a field mask is set.
        pub fn set_include_grid_data<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_include_grid_data(v);
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::Spreadsheet>> {
            (*self.0.stub)
                .get_spreadsheet(self.0.request, self.0.options)
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for GetSpreadsheet {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sheets::batch_update_spreadsheet][crate::client::Sheets::batch_update_spreadsheet] calls.
    #[derive(Clone, Debug)]
    pub struct BatchUpdateSpreadsheet(
        RequestBuilder<crate::model::requests::BatchUpdateSpreadsheetRequest>,
    );

    impl BatchUpdateSpreadsheet {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Sheets>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the spreadsheet to apply the updates to. Required.
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_spreadsheet_id(v);
            self
        }

        /// Sets the request body: the ordered list of updates to apply.
        pub fn set_request<T: Into<crate::model::BatchUpdateSpreadsheetRequest>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request = self.0.request.set_request(v);
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::BatchUpdateSpreadsheetResponse>> {
            (*self.0.stub)
                .batch_update_spreadsheet(self.0.request, self.0.options)
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for BatchUpdateSpreadsheet {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sheets::update_values][crate::client::Sheets::update_values] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateValues(RequestBuilder<crate::model::requests::UpdateValuesRequest>);

    impl UpdateValues {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Sheets>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the spreadsheet to update. Required.
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_spreadsheet_id(v);
            self
        }

        /// Sets the A1 notation of the values to update. Required.
        pub fn set_range<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_range(v);
            self
        }

        /// Sets how the input data should be interpreted: `RAW` or
        /// `USER_ENTERED`.
        pub fn set_value_input_option<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_value_input_option(v);
            self
        }

        /// Sets the request body: the values to write.
        pub fn set_value_range<T: Into<crate::model::ValueRange>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_value_range(v);
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::UpdateValuesResponse>> {
            (*self.0.stub)
                .update_values(self.0.request, self.0.options)
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for UpdateValues {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sheets::get_values][crate::client::Sheets::get_values] calls.
    #[derive(Clone, Debug)]
    pub struct GetValues(RequestBuilder<crate::model::requests::GetValuesRequest>);

    impl GetValues {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Sheets>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the spreadsheet to retrieve data from. Required.
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_spreadsheet_id(v);
            self
        }

        /// Sets the A1 notation of the values to retrieve. Required.
        pub fn set_range<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_range(v);
            self
        }

        /// Sets the major dimension that results should use.
        ///
        /// For example, if the spreadsheet data is `A1=1,B1=2,A2=3,B2=4`,
        /// then `A1:B2` with `ROWS` returns `[[1,2],[3,4]]`, whereas `A1:B2`
        /// with `COLUMNS` returns `[[1,3],[2,4]]`.
        pub fn set_major_dimension<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_major_dimension(v);
            self
        }

        /// Sets how values should be represented in the output.
        pub fn set_value_render_option<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_value_render_option(v);
            self
        }

        /// Sets how dates, times, and durations should be represented in the
        /// output.
        pub fn set_date_time_render_option<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_date_time_render_option(v);
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::ValueRange>> {
            (*self.0.stub)
                .get_values(self.0.request, self.0.options)
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for GetValues {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sheets::batch_get_values][crate::client::Sheets::batch_get_values] calls.
    #[derive(Clone, Debug)]
    pub struct BatchGetValues(RequestBuilder<crate::model::requests::BatchGetValuesRequest>);

    impl BatchGetValues {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Sheets>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the spreadsheet to retrieve data from. Required.
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_spreadsheet_id(v);
            self
        }

        /// Sets the A1 notation of the values to retrieve. One query
        /// parameter is sent per range.
        pub fn set_ranges<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request = self.0.request.set_ranges(v);
            self
        }

        /// Sets the major dimension that results should use.
        pub fn set_major_dimension<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_major_dimension(v);
            self
        }

        /// Sets how values should be represented in the output.
        pub fn set_value_render_option<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_value_render_option(v);
            self
        }

        /// Sets how dates, times, and durations should be represented in the
        /// output.
        pub fn set_date_time_render_option<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_date_time_render_option(v);
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::BatchGetValuesResponse>> {
            (*self.0.stub)
                .batch_get_values(self.0.request, self.0.options)
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for BatchGetValues {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sheets::batch_update_values][crate::client::Sheets::batch_update_values] calls.
    #[derive(Clone, Debug)]
    pub struct BatchUpdateValues(RequestBuilder<crate::model::requests::BatchUpdateValuesRequest>);

    impl BatchUpdateValues {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Sheets>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the spreadsheet to update. Required.
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_spreadsheet_id(v);
            self
        }

        /// Sets the request body: the value ranges to write and the input
        /// option.
        pub fn set_request<T: Into<crate::model::BatchUpdateValuesRequest>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request = self.0.request.set_request(v);
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::BatchUpdateValuesResponse>> {
            (*self.0.stub)
                .batch_update_values(self.0.request, self.0.options)
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for BatchUpdateValues {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sheets::copy_sheet][crate::client::Sheets::copy_sheet] calls.
    #[derive(Clone, Debug)]
    pub struct CopySheet(RequestBuilder<crate::model::requests::CopySheetRequest>);

    impl CopySheet {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Sheets>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the spreadsheet containing the sheet to copy. Required.
        pub fn set_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_spreadsheet_id(v);
            self
        }

        /// Sets the sheet to copy. Required.
        pub fn set_sheet_id<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_sheet_id(v);
            self
        }

        /// Sets the request body: the destination spreadsheet.
        pub fn set_request<T: Into<crate::model::CopySheetToAnotherSpreadsheetRequest>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request = self.0.request.set_request(v);
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::SheetProperties>> {
            (*self.0.stub)
                .copy_sheet(self.0.request, self.0.options)
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for CopySheet {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

}
