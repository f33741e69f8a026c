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

//! Verify clients can be mocked through the stub trait, the way
//! applications test their own code against hard-to-trigger conditions.

use gax::error::rpc::{Code, Status};
use gax::options::{RequestOptions, RequestOptionsBuilder};
use gax::response::Response;
use google_sheets_v4::client::Sheets;
use google_sheets_v4::model;
use google_sheets_v4::{Error, Result};
use std::sync::{Arc, Mutex};

/// A recorded `get_values` call: the request fields and the options the
/// builder accumulated.
#[derive(Clone, Debug)]
struct RecordedCall {
    spreadsheet_id: String,
    range: String,
    fields: Option<String>,
    quota_user: Option<String>,
}

/// A fake stub recording the requests it receives.
///
/// Only the methods used by the tests are implemented; the rest keep the
/// default (panicking) implementation.
#[derive(Debug, Default)]
struct FakeSheets {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl google_sheets_v4::stub::Sheets for FakeSheets {
    async fn get_values(
        &self,
        req: model::requests::GetValuesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ValueRange>> {
        self.calls.lock().unwrap().push(RecordedCall {
            spreadsheet_id: req.spreadsheet_id.clone(),
            range: req.range.clone(),
            fields: options.fields().clone(),
            quota_user: options.quota_user().clone(),
        });
        let response = model::ValueRange::new()
            .set_range(req.range)
            .set_values([vec![serde_json::json!("fake")]]);
        Ok(Response::from(response))
    }

    async fn copy_sheet(
        &self,
        _req: model::requests::CopySheetRequest,
        _options: RequestOptions,
    ) -> Result<Response<model::SheetProperties>> {
        Err(Error::service(
            Status::default()
                .set_code(Code::ResourceExhausted)
                .set_message("Quota exceeded for quota metric 'Write requests'"),
        ))
    }
}

#[tokio::test]
async fn mocked_response_and_recorded_request() -> anyhow::Result<()> {
    let fake = FakeSheets::default();
    let calls = fake.calls.clone();
    let client = Sheets::from_stub(fake);

    let values = client
        .get_values()
        .set_spreadsheet_id("abc")
        .set_range("Sheet1!A1")
        .with_fields("values")
        .with_quota_user("user-42")
        .send()
        .await?
        .into_body();
    assert_eq!(values.values, vec![vec![serde_json::json!("fake")]]);

    // The stub observed the request message and the per-call options.
    let calls = calls.lock().unwrap();
    let call = &calls[0];
    assert_eq!(call.spreadsheet_id, "abc");
    assert_eq!(call.range, "Sheet1!A1");
    assert_eq!(call.fields.as_deref(), Some("values"));
    assert_eq!(call.quota_user.as_deref(), Some("user-42"));
    Ok(())
}

#[tokio::test]
async fn mocked_error_is_propagated() {
    let client = Sheets::from_stub(FakeSheets::default());
    let err = client
        .copy_sheet()
        .set_spreadsheet_id("abc")
        .set_sheet_id(1)
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.code), Some(Code::ResourceExhausted));
}

#[tokio::test]
#[should_panic]
async fn unmocked_method_panics() {
    let client = Sheets::from_stub(FakeSheets::default());
    // `create_spreadsheet` is not implemented by the fake.
    let _ = client.create_spreadsheet().send().await;
}
