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

use crate::Result;
use crate::stub::Sheets as _;
use gax::options::RequestOptions;
use gax::response::Response;

/// Implements a [Sheets][crate::stub::Sheets] decorator for logging and
/// tracing.
///
/// Selected instead of the plain transport when the client is built with
/// tracing enabled.
#[derive(Clone, Debug)]
pub struct Sheets {
    inner: crate::transport::Sheets,
}

impl Sheets {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        crate::transport::Sheets::new(config)
            .await
            .map(|inner| Self { inner })
    }
}

impl crate::stub::Sheets for Sheets {
    #[tracing::instrument(ret)]
    async fn create_spreadsheet(
        &self,
        req: crate::model::Spreadsheet,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Spreadsheet>> {
        self.inner.create_spreadsheet(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_spreadsheet(
        &self,
        req: crate::model::requests::GetSpreadsheetRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Spreadsheet>> {
        self.inner.get_spreadsheet(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn batch_update_spreadsheet(
        &self,
        req: crate::model::requests::BatchUpdateSpreadsheetRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::BatchUpdateSpreadsheetResponse>> {
        self.inner.batch_update_spreadsheet(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_values(
        &self,
        req: crate::model::requests::UpdateValuesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::UpdateValuesResponse>> {
        self.inner.update_values(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_values(
        &self,
        req: crate::model::requests::GetValuesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ValueRange>> {
        self.inner.get_values(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn batch_get_values(
        &self,
        req: crate::model::requests::BatchGetValuesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::BatchGetValuesResponse>> {
        self.inner.batch_get_values(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn batch_update_values(
        &self,
        req: crate::model::requests::BatchUpdateValuesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::BatchUpdateValuesResponse>> {
        self.inner.batch_update_values(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn copy_sheet(
        &self,
        req: crate::model::requests::CopySheetRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::SheetProperties>> {
        self.inner.copy_sheet(req, options).await
    }
}
