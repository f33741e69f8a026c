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

//! Verify the client against a local HTTP server: URL construction, query
//! parameter handling, body serialization, and error classification.

use gax::error::rpc::Code;
use gax::options::RequestOptionsBuilder;
use google_sheets_v4::client::Sheets;
use google_sheets_v4::model;
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;

type Result<T> = anyhow::Result<T>;

async fn test_client(server: &Server) -> Result<Sheets> {
    let client = Sheets::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(gax::credentials::testing::test_credentials())
        .build()
        .await?;
    Ok(client)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_values_rows_major() -> Result<()> {
    // The fixture sheet contains A1=1, B1=2, A2=3, B2=4.
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v4/spreadsheets/sheet1/values/A1:B2"),
            request::query(url_decoded(contains(("majorDimension", "ROWS")))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(
                    json!({
                        "range": "Sheet1!A1:B2",
                        "majorDimension": "ROWS",
                        "values": [[1, 2], [3, 4]],
                    })
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let response = client
        .get_values()
        .set_spreadsheet_id("sheet1")
        .set_range("A1:B2")
        .set_major_dimension("ROWS")
        .send()
        .await?;
    let values = response.into_body();
    assert_eq!(values.values, vec![
        vec![json!(1), json!(2)],
        vec![json!(3), json!(4)]
    ]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_values_columns_major() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v4/spreadsheets/sheet1/values/A1:B2"),
            request::query(url_decoded(contains(("majorDimension", "COLUMNS")))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(
                    json!({
                        "range": "Sheet1!A1:B2",
                        "majorDimension": "COLUMNS",
                        "values": [[1, 3], [2, 4]],
                    })
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let response = client
        .get_values()
        .set_spreadsheet_id("sheet1")
        .set_range("A1:B2")
        .set_major_dimension("COLUMNS")
        .send()
        .await?;
    let values = response.into_body();
    assert_eq!(values.values, vec![
        vec![json!(1), json!(3)],
        vec![json!(2), json!(4)]
    ]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn path_parameters_are_percent_encoded() -> Result<()> {
    let server = Server::run();
    // `Sheet1!A1:B2` must appear as `Sheet1%21A1%3AB2` in the request path.
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/v4/spreadsheets/my-sheet/values/Sheet1%21A1%3AB2",
        ))
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(json!({"range": "Sheet1!A1:B2"}).to_string()),
        ),
    );

    let client = test_client(&server).await?;
    client
        .get_values()
        .set_spreadsheet_id("my-sheet")
        .set_range("Sheet1!A1:B2")
        .send()
        .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn omitted_optional_parameters_are_absent() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v4/spreadsheets/abc/values/A1"),
            // No options were set, so none of the optional parameters may
            // appear, not even with empty values.
            request::query(url_decoded(not(contains(key("majorDimension"))))),
            request::query(url_decoded(not(contains(key("valueRenderOption"))))),
            request::query(url_decoded(not(contains(key("dateTimeRenderOption"))))),
            request::query(url_decoded(not(contains(key("key"))))),
            request::query(url_decoded(not(contains(key("quotaUser"))))),
            request::query(url_decoded(not(contains(key("fields"))))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(json!({"range": "A1"}).to_string()),
        ),
    );

    let client = test_client(&server).await?;
    client
        .get_values()
        .set_spreadsheet_id("abc")
        .set_range("A1")
        .send()
        .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn api_key_and_quota_user_defaults() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v4/spreadsheets/abc/values/A1"),
            request::query(url_decoded(contains(("key", "test-api-key")))),
            request::query(url_decoded(contains(("quotaUser", "client-user")))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(json!({"range": "A1"}).to_string()),
        ),
    );

    let client = Sheets::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(gax::credentials::testing::test_credentials())
        .with_api_key("test-api-key")
        .with_quota_user("client-user")
        .build()
        .await?;
    client
        .get_values()
        .set_spreadsheet_id("abc")
        .set_range("A1")
        .send()
        .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn per_call_quota_user_overrides_default() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v4/spreadsheets/abc/values/A1"),
            request::query(url_decoded(contains(("quotaUser", "call-user")))),
            request::query(url_decoded(not(contains(("quotaUser", "client-user"))))),
            request::query(url_decoded(contains(("fields", "values")))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(json!({"range": "A1"}).to_string()),
        ),
    );

    let client = Sheets::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(gax::credentials::testing::test_credentials())
        .with_quota_user("client-user")
        .build()
        .await?;
    client
        .get_values()
        .set_spreadsheet_id("abc")
        .set_range("A1")
        .with_quota_user("call-user")
        .with_fields("values")
        .send()
        .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn create_spreadsheet_posts_body() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/v4/spreadsheets"),
            request::body(json_decoded(eq(json!({
                "properties": {"title": "Expenses"},
            })))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(
                    json!({
                        "spreadsheetId": "new-id",
                        "properties": {"title": "Expenses"},
                        "spreadsheetUrl": "https://docs.google.com/spreadsheets/d/new-id/edit",
                    })
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let created = client
        .create_spreadsheet()
        .set_spreadsheet(
            model::Spreadsheet::new()
                .set_properties(model::SpreadsheetProperties::new().set_title("Expenses")),
        )
        .send()
        .await?;
    assert_eq!(created.body().spreadsheet_id.as_deref(), Some("new-id"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_spreadsheet_with_ranges_and_grid_data() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v4/spreadsheets/abc"),
            request::query(url_decoded(contains(("ranges", "Sheet1!A1:B2")))),
            request::query(url_decoded(contains(("ranges", "Sheet2!C3")))),
            request::query(url_decoded(contains(("includeGridData", "true")))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(
                    json!({
                        "spreadsheetId": "abc",
                        "sheets": [{
                            "properties": {"sheetId": 0, "title": "Sheet1"},
                            "data": [{"rowData": [{"values": [
                                {"formattedValue": "1"},
                                {"formattedValue": "2"},
                            ]}]}],
                        }],
                    })
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let spreadsheet = client
        .get_spreadsheet()
        .set_spreadsheet_id("abc")
        .set_ranges(["Sheet1!A1:B2", "Sheet2!C3"])
        .set_include_grid_data(true)
        .send()
        .await?
        .into_body();
    let sheet = &spreadsheet.sheets[0];
    let cell = &sheet.data[0].row_data[0].values[0];
    assert_eq!(cell.formatted_value.as_deref(), Some("1"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn update_values_put_with_input_option() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PUT", "/v4/spreadsheets/abc/values/Sheet1%21A1%3AB2"),
            request::query(url_decoded(contains(("valueInputOption", "USER_ENTERED")))),
            request::body(json_decoded(eq(json!({
                "range": "Sheet1!A1:B2",
                "majorDimension": "ROWS",
                "values": [["a", 1], ["b", 2]],
            })))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(
                    json!({
                        "spreadsheetId": "abc",
                        "updatedRange": "Sheet1!A1:B2",
                        "updatedRows": 2,
                        "updatedColumns": 2,
                        "updatedCells": 4,
                    })
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let response = client
        .update_values()
        .set_spreadsheet_id("abc")
        .set_range("Sheet1!A1:B2")
        .set_value_input_option("USER_ENTERED")
        .set_value_range(
            model::ValueRange::new()
                .set_range("Sheet1!A1:B2")
                .set_major_dimension("ROWS")
                .set_values([vec![json!("a"), json!(1)], vec![json!("b"), json!(2)]]),
        )
        .send()
        .await?
        .into_body();
    assert_eq!(response.updated_cells, Some(4));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn batch_get_values_repeats_ranges() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v4/spreadsheets/abc/values:batchGet"),
            request::query(url_decoded(contains(("ranges", "A1:B2")))),
            request::query(url_decoded(contains(("ranges", "D1:E2")))),
            request::query(url_decoded(contains(("valueRenderOption", "UNFORMATTED_VALUE")))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(
                    json!({
                        "spreadsheetId": "abc",
                        "valueRanges": [
                            {"range": "Sheet1!A1:B2", "values": [[1, 2]]},
                            {"range": "Sheet1!D1:E2", "values": [[4, 5]]},
                        ],
                    })
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let response = client
        .batch_get_values()
        .set_spreadsheet_id("abc")
        .set_ranges(["A1:B2", "D1:E2"])
        .set_value_render_option("UNFORMATTED_VALUE")
        .send()
        .await?
        .into_body();
    assert_eq!(response.value_ranges.len(), 2);
    assert_eq!(
        response.value_ranges[1].range.as_deref(),
        Some("Sheet1!D1:E2")
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn batch_update_values_posts_body() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/v4/spreadsheets/abc/values:batchUpdate"),
            request::body(json_decoded(eq(json!({
                "valueInputOption": "RAW",
                "data": [{"range": "A1", "values": [["x"]]}],
            })))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(
                    json!({
                        "spreadsheetId": "abc",
                        "totalUpdatedCells": 1,
                        "responses": [{"spreadsheetId": "abc", "updatedCells": 1}],
                    })
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let response = client
        .batch_update_values()
        .set_spreadsheet_id("abc")
        .set_request(
            model::BatchUpdateValuesRequest::new()
                .set_value_input_option("RAW")
                .set_data([model::ValueRange::new()
                    .set_range("A1")
                    .set_values([vec![json!("x")]])]),
        )
        .send()
        .await?
        .into_body();
    assert_eq!(response.total_updated_cells, Some(1));
    assert_eq!(response.responses.len(), 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn batch_update_spreadsheet_replies_align_with_requests() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/v4/spreadsheets/abc:batchUpdate"),
            request::body(json_decoded(eq(json!({
                "requests": [
                    {"updateSpreadsheetProperties": {"properties": {"title": "Renamed"}, "fields": "title"}},
                    {"deleteSheet": {"sheetId": 99}},
                    {"addSheet": {"properties": {"title": "New Sheet"}}},
                    {"deleteNamedRange": {"namedRangeId": "range-1"}},
                ],
            })))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(
                    // Four requests where only the third produces a reply:
                    // the response mirrors them with empty placeholders.
                    json!({
                        "spreadsheetId": "abc",
                        "replies": [
                            {},
                            {},
                            {"addSheet": {"properties": {"sheetId": 42, "title": "New Sheet"}}},
                            {},
                        ],
                    })
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let response = client
        .batch_update_spreadsheet()
        .set_spreadsheet_id("abc")
        .set_request(model::BatchUpdateSpreadsheetRequest::new().set_requests([
            model::Request::new().set_update_spreadsheet_properties(
                model::UpdateSpreadsheetPropertiesRequest::new()
                    .set_properties(model::SpreadsheetProperties::new().set_title("Renamed"))
                    .set_fields("title"),
            ),
            model::Request::new()
                .set_delete_sheet(model::DeleteSheetRequest::new().set_sheet_id(99)),
            model::Request::new().set_add_sheet(
                model::AddSheetRequest::new()
                    .set_properties(model::SheetProperties::new().set_title("New Sheet")),
            ),
            model::Request::new().set_delete_named_range(
                model::DeleteNamedRangeRequest::new().set_named_range_id("range-1"),
            ),
        ]))
        .send()
        .await?
        .into_body();

    assert_eq!(response.replies.len(), 4);
    assert!(response.replies[0].is_empty());
    assert!(response.replies[1].is_empty());
    assert!(!response.replies[2].is_empty());
    assert!(response.replies[3].is_empty());
    let added = response.replies[2].add_sheet.as_ref().unwrap();
    assert_eq!(added.properties.as_ref().unwrap().sheet_id, Some(42));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn copy_sheet_path_and_body() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/v4/spreadsheets/src-id/sheets/7:copyTo"),
            request::body(json_decoded(eq(json!({
                "destinationSpreadsheetId": "dst-id",
            })))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(
                    json!({"sheetId": 12, "title": "Copy of Data", "index": 3})
                        .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let properties = client
        .copy_sheet()
        .set_spreadsheet_id("src-id")
        .set_sheet_id(7)
        .set_request(
            model::CopySheetToAnotherSpreadsheetRequest::new()
                .set_destination_spreadsheet_id("dst-id"),
        )
        .send()
        .await?
        .into_body();
    assert_eq!(properties.sheet_id, Some(12));
    assert_eq!(properties.title.as_deref(), Some("Copy of Data"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn server_error_kind() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/v4/spreadsheets/abc")).respond_with(
            status_code(503)
                .insert_header("Content-Type", "application/json")
                .body(
                    json!({"error": {
                        "code": 503,
                        "status": "UNAVAILABLE",
                        "message": "The service is currently unavailable.",
                    }})
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let err = client
        .get_spreadsheet()
        .set_spreadsheet_id("abc")
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
    assert_eq!(err.http_status_code(), Some(503));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn client_error_kind() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/v4/spreadsheets/abc/values/NotARange",
        ))
        .respond_with(
            status_code(400)
                .insert_header("Content-Type", "application/json")
                .body(
                    json!({"error": {
                        "code": 400,
                        "status": "INVALID_ARGUMENT",
                        "message": "Unable to parse range: NotARange",
                    }})
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let err = client
        .get_values()
        .set_spreadsheet_id("abc")
        .set_range("NotARange")
        .send()
        .await
        .unwrap_err();
    let status = err.status().expect("a service error with status");
    assert_eq!(status.code, Code::InvalidArgument);
    assert!(status.message.contains("NotARange"), "{status:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn authorization_error_kind() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/v4/spreadsheets/abc")).respond_with(
            status_code(403)
                .insert_header("Content-Type", "application/json")
                .body(
                    json!({"error": {
                        "code": 403,
                        "status": "PERMISSION_DENIED",
                        "message": "The caller does not have permission",
                    }})
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let err = client
        .get_spreadsheet()
        .set_spreadsheet_id("abc")
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn missing_required_parameters_fail_locally() -> Result<()> {
    let server = Server::run();
    // No expectations: the requests must never reach the server.
    let client = test_client(&server).await?;

    let err = client.get_spreadsheet().send().await.unwrap_err();
    assert!(err.is_binding(), "{err:?}");

    let err = client
        .get_values()
        .set_spreadsheet_id("abc")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_binding(), "{err:?}");

    let err = client
        .copy_sheet()
        .set_spreadsheet_id("abc")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}
