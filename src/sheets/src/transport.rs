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
use crate::model;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::options::internal::set_default_idempotency;
use gax::path_parameter::enc;
use gax::response::Response;
use gaxi::http::{NoBody, ReqwestClient};

/// Implements [Sheets][crate::stub::Sheets] over HTTP.
///
/// Each method maps one RPC to its HTTP verb and URL template, substitutes
/// the percent-encoded path parameters, adds the optional query parameters
/// that are set, and delegates execution to the shared client. The default
/// idempotency follows the HTTP verb: reads are idempotent, writes are not.
#[derive(Clone, Debug)]
pub struct Sheets {
    inner: ReqwestClient,
}

impl Sheets {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await
            .map(|inner| Self { inner })
    }
}

fn require<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(gaxi::path_parameter::missing(name));
    }
    Ok(value)
}

impl crate::stub::Sheets for Sheets {
    async fn create_spreadsheet(
        &self,
        req: model::Spreadsheet,
        options: RequestOptions,
    ) -> Result<Response<model::Spreadsheet>> {
        let options = set_default_idempotency(options, false);
        let builder = self
            .inner
            .builder(reqwest::Method::POST, "/v4/spreadsheets".to_string());
        self.inner.execute(builder, Some(req), options).await
    }

    async fn get_spreadsheet(
        &self,
        req: model::requests::GetSpreadsheetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Spreadsheet>> {
        let options = set_default_idempotency(options, true);
        let spreadsheet_id = require("spreadsheetId", &req.spreadsheet_id)?;
        let builder = self.inner.builder(
            reqwest::Method::GET,
            format!("/v4/spreadsheets/{}", enc(spreadsheet_id)),
        );
        let builder = gax::query_parameter::add(builder, "ranges", &req.ranges).map_err(Error::ser)?;
        let builder = gax::query_parameter::add(builder, "includeGridData", &req.include_grid_data)
            .map_err(Error::ser)?;
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }

    async fn batch_update_spreadsheet(
        &self,
        req: model::requests::BatchUpdateSpreadsheetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::BatchUpdateSpreadsheetResponse>> {
        let options = set_default_idempotency(options, false);
        let spreadsheet_id = require("spreadsheetId", &req.spreadsheet_id)?;
        let builder = self.inner.builder(
            reqwest::Method::POST,
            format!("/v4/spreadsheets/{}:batchUpdate", enc(spreadsheet_id)),
        );
        self.inner.execute(builder, req.request, options).await
    }

    async fn update_values(
        &self,
        req: model::requests::UpdateValuesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateValuesResponse>> {
        let options = set_default_idempotency(options, false);
        let spreadsheet_id = require("spreadsheetId", &req.spreadsheet_id)?;
        let range = require("range", &req.range)?;
        let builder = self.inner.builder(
            reqwest::Method::PUT,
            format!(
                "/v4/spreadsheets/{}/values/{}",
                enc(spreadsheet_id),
                enc(range)
            ),
        );
        let builder =
            gax::query_parameter::add(builder, "valueInputOption", &req.value_input_option)
                .map_err(Error::ser)?;
        self.inner.execute(builder, req.value_range, options).await
    }

    async fn get_values(
        &self,
        req: model::requests::GetValuesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ValueRange>> {
        let options = set_default_idempotency(options, true);
        let spreadsheet_id = require("spreadsheetId", &req.spreadsheet_id)?;
        let range = require("range", &req.range)?;
        let builder = self.inner.builder(
            reqwest::Method::GET,
            format!(
                "/v4/spreadsheets/{}/values/{}",
                enc(spreadsheet_id),
                enc(range)
            ),
        );
        let builder =
            gax::query_parameter::add(builder, "valueRenderOption", &req.value_render_option)
                .map_err(Error::ser)?;
        let builder = gax::query_parameter::add(
            builder,
            "dateTimeRenderOption",
            &req.date_time_render_option,
        )
        .map_err(Error::ser)?;
        let builder = gax::query_parameter::add(builder, "majorDimension", &req.major_dimension)
            .map_err(Error::ser)?;
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }

    async fn batch_get_values(
        &self,
        req: model::requests::BatchGetValuesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::BatchGetValuesResponse>> {
        let options = set_default_idempotency(options, true);
        let spreadsheet_id = require("spreadsheetId", &req.spreadsheet_id)?;
        let builder = self.inner.builder(
            reqwest::Method::GET,
            format!("/v4/spreadsheets/{}/values:batchGet", enc(spreadsheet_id)),
        );
        let builder = gax::query_parameter::add(builder, "ranges", &req.ranges).map_err(Error::ser)?;
        let builder =
            gax::query_parameter::add(builder, "valueRenderOption", &req.value_render_option)
                .map_err(Error::ser)?;
        let builder = gax::query_parameter::add(
            builder,
            "dateTimeRenderOption",
            &req.date_time_render_option,
        )
        .map_err(Error::ser)?;
        let builder = gax::query_parameter::add(builder, "majorDimension", &req.major_dimension)
            .map_err(Error::ser)?;
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }

    async fn batch_update_values(
        &self,
        req: model::requests::BatchUpdateValuesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::BatchUpdateValuesResponse>> {
        let options = set_default_idempotency(options, false);
        let spreadsheet_id = require("spreadsheetId", &req.spreadsheet_id)?;
        let builder = self.inner.builder(
            reqwest::Method::POST,
            format!(
                "/v4/spreadsheets/{}/values:batchUpdate",
                enc(spreadsheet_id)
            ),
        );
        self.inner.execute(builder, req.request, options).await
    }

    async fn copy_sheet(
        &self,
        req: model::requests::CopySheetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::SheetProperties>> {
        let options = set_default_idempotency(options, false);
        let spreadsheet_id = require("spreadsheetId", &req.spreadsheet_id)?;
        let sheet_id = req
            .sheet_id
            .ok_or_else(|| gaxi::path_parameter::missing("sheetId"))?;
        let builder = self.inner.builder(
            reqwest::Method::POST,
            format!(
                "/v4/spreadsheets/{}/sheets/{}:copyTo",
                enc(spreadsheet_id),
                sheet_id
            ),
        );
        self.inner.execute(builder, req.request, options).await
    }
}
