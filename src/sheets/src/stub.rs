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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to
//! test how their application works with different (and sometimes hard to
//! trigger) error conditions. Define a mock implementing [Sheets], then
//! create a client with [from_stub][crate::client::Sheets::from_stub].

use crate::Result;
use gax::options::RequestOptions;
use gax::response::Response;

/// Defines the trait used to implement [crate::client::Sheets].
///
/// Application developers only need to implement this trait to mock the
/// client. All the methods have a default implementation that panics, so
/// mocks only implement the methods the test actually calls.
pub trait Sheets: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Sheets::create_spreadsheet].
    fn create_spreadsheet(
        &self,
        _req: crate::model::Spreadsheet,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<crate::model::Spreadsheet>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::Sheets::get_spreadsheet].
    fn get_spreadsheet(
        &self,
        _req: crate::model::requests::GetSpreadsheetRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<crate::model::Spreadsheet>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::Sheets::batch_update_spreadsheet].
    fn batch_update_spreadsheet(
        &self,
        _req: crate::model::requests::BatchUpdateSpreadsheetRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<crate::model::BatchUpdateSpreadsheetResponse>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::Sheets::update_values].
    fn update_values(
        &self,
        _req: crate::model::requests::UpdateValuesRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<crate::model::UpdateValuesResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::Sheets::get_values].
    fn get_values(
        &self,
        _req: crate::model::requests::GetValuesRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<crate::model::ValueRange>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::Sheets::batch_get_values].
    fn batch_get_values(
        &self,
        _req: crate::model::requests::BatchGetValuesRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<crate::model::BatchGetValuesResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::Sheets::batch_update_values].
    fn batch_update_values(
        &self,
        _req: crate::model::requests::BatchUpdateValuesRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<crate::model::BatchUpdateValuesResponse>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [crate::client::Sheets::copy_sheet].
    fn copy_sheet(
        &self,
        _req: crate::model::requests::CopySheetRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<Response<crate::model::SheetProperties>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// The dyn-compatible version of [Sheets].
pub mod dynamic {
    use super::{RequestOptions, Response, Result};

    /// A dyn-compatible version of [super::Sheets].
    ///
    /// The clients hold an implementation of this trait. All the methods
    /// forward to the generic trait, which mocks implement.
    #[async_trait::async_trait]
    pub trait Sheets: std::fmt::Debug + Send + Sync {
        async fn create_spreadsheet(
            &self,
            req: crate::model::Spreadsheet,
            options: RequestOptions,
        ) -> Result<Response<crate::model::Spreadsheet>>;

        async fn get_spreadsheet(
            &self,
            req: crate::model::requests::GetSpreadsheetRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::Spreadsheet>>;

        async fn batch_update_spreadsheet(
            &self,
            req: crate::model::requests::BatchUpdateSpreadsheetRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::BatchUpdateSpreadsheetResponse>>;

        async fn update_values(
            &self,
            req: crate::model::requests::UpdateValuesRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::UpdateValuesResponse>>;

        async fn get_values(
            &self,
            req: crate::model::requests::GetValuesRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::ValueRange>>;

        async fn batch_get_values(
            &self,
            req: crate::model::requests::BatchGetValuesRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::BatchGetValuesResponse>>;

        async fn batch_update_values(
            &self,
            req: crate::model::requests::BatchUpdateValuesRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::BatchUpdateValuesResponse>>;

        async fn copy_sheet(
            &self,
            req: crate::model::requests::CopySheetRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::SheetProperties>>;
    }

    /// All implementations of [super::Sheets] are [Sheets].
    #[async_trait::async_trait]
    impl<T: super::Sheets> Sheets for T {
        async fn create_spreadsheet(
            &self,
            req: crate::model::Spreadsheet,
            options: RequestOptions,
        ) -> Result<Response<crate::model::Spreadsheet>> {
            T::create_spreadsheet(self, req, options).await
        }

        async fn get_spreadsheet(
            &self,
            req: crate::model::requests::GetSpreadsheetRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::Spreadsheet>> {
            T::get_spreadsheet(self, req, options).await
        }

        async fn batch_update_spreadsheet(
            &self,
            req: crate::model::requests::BatchUpdateSpreadsheetRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::BatchUpdateSpreadsheetResponse>> {
            T::batch_update_spreadsheet(self, req, options).await
        }

        async fn update_values(
            &self,
            req: crate::model::requests::UpdateValuesRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::UpdateValuesResponse>> {
            T::update_values(self, req, options).await
        }

        async fn get_values(
            &self,
            req: crate::model::requests::GetValuesRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::ValueRange>> {
            T::get_values(self, req, options).await
        }

        async fn batch_get_values(
            &self,
            req: crate::model::requests::BatchGetValuesRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::BatchGetValuesResponse>> {
            T::batch_get_values(self, req, options).await
        }

        async fn batch_update_values(
            &self,
            req: crate::model::requests::BatchUpdateValuesRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::BatchUpdateValuesResponse>> {
            T::batch_update_values(self, req, options).await
        }

        async fn copy_sheet(
            &self,
            req: crate::model::requests::CopySheetRequest,
            options: RequestOptions,
        ) -> Result<Response<crate::model::SheetProperties>> {
            T::copy_sheet(self, req, options).await
        }
    }
}
