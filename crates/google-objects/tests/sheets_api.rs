//! Sheets API tests against a mock server.

use google_objects::common::ErrorCode;
use google_objects::sheets::{NewSheet, SheetsRequest, SpreadsheetProperties, ValueInputOption};
use google_objects::{BatchUpdate, GoogleClient, SheetsApi};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> SheetsApi {
    let client = GoogleClient::new("test-token").unwrap();
    SheetsApi::with_base_url(client, format!("{}/v4", server.uri()))
}

fn spreadsheet_body() -> serde_json::Value {
    json!({
        "spreadsheetId": "abc",
        "properties": {"title": "Budget", "locale": "en_US", "timeZone": "Europe/Dublin"},
        "sheets": [
            {"properties": {"sheetId": 0, "title": "Sheet1", "index": 0,
                "gridProperties": {"rowCount": 100, "columnCount": 10}}},
            {"properties": {"sheetId": 42, "title": "Costs", "index": 1}}
        ],
        "namedRanges": [
            {"namedRangeId": "nr1", "name": "totals",
                "range": {"sheetId": 42, "startRowIndex": 0, "endRowIndex": 2,
                    "startColumnIndex": 0, "endColumnIndex": 2}}
        ],
        "spreadsheetUrl": "https://docs.google.com/spreadsheets/d/abc/edit"
    })
}

async fn mount_spreadsheet(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/abc"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(spreadsheet_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_spreadsheet() {
    let server = MockServer::start().await;
    mount_spreadsheet(&server).await;

    let spreadsheet = api(&server).get_spreadsheet("abc").await.unwrap();

    assert_eq!(spreadsheet.id(), "abc");
    assert_eq!(spreadsheet.title(), Some("Budget"));
    assert_eq!(spreadsheet.time_zone(), Some("Europe/Dublin"));
    assert_eq!(spreadsheet.sheets().len(), 2);
    assert_eq!(spreadsheet.sheet("42").unwrap().title(), "Costs");
    assert_eq!(spreadsheet.sheet("Sheet1").unwrap().id(), 0);

    let totals = spreadsheet.get_named_range_by_name("totals").unwrap();
    assert_eq!(totals.sheet_name(&spreadsheet), Some("Costs"));
    assert_eq!(totals.as_a1(&spreadsheet).unwrap(), "'Costs'!A1:B2");
}

#[tokio::test]
async fn test_get_and_update_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/abc/values/Sheet1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Sheet1",
            "majorDimension": "ROWS",
            "values": [["name", "qty"], ["apples", "3"]]
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v4/spreadsheets/abc/values/Sheet1"))
        .and(query_param("valueInputOption", "RAW"))
        .and(body_json(json!({"values": [["name", "qty"], ["apples", "4"]]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "abc",
            "updatedRange": "Sheet1!A1:B2",
            "updatedRows": 2,
            "updatedColumns": 2,
            "updatedCells": 4
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut block = api(&server).get_values("abc", "Sheet1").await.unwrap();
    assert_eq!(block.len(), 2);
    assert_eq!(block[1][0], json!("apples"));

    block
        .scoped(|b| {
            b[1][1] = json!("4");
        })
        .await
        .unwrap();
    assert_eq!(block[1][1], json!("4"));
}

#[tokio::test]
async fn test_update_values_user_entered() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v4/spreadsheets/abc/values/Sheet1"))
        .and(query_param("valueInputOption", "USER_ENTERED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updatedCells": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let response = api(&server)
        .update_values("abc", "Sheet1", &[vec![json!("=1+1")]], ValueInputOption::UserEntered)
        .await
        .unwrap();
    assert_eq!(response.updated_cells, Some(1));
}

#[tokio::test]
async fn test_append_values() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/abc/values/Sheet1:append"))
        .and(query_param("valueInputOption", "USER_ENTERED"))
        .and(query_param("insertDataOption", "INSERT_ROWS"))
        .and(body_json(json!({"values": [["pears", "7"]]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "abc",
            "tableRange": "Sheet1!A1:B2",
            "updates": {"updatedRange": "Sheet1!A3:B3", "updatedRows": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = api(&server)
        .append_values("abc", "Sheet1", &[vec![json!("pears"), json!("7")]])
        .await
        .unwrap();
    assert_eq!(response.table_range.as_deref(), Some("Sheet1!A1:B2"));
    assert_eq!(response.updates.and_then(|u| u.updated_rows), Some(1));
}

#[tokio::test]
async fn test_batch_update_flushes_and_clears() {
    let server = MockServer::start().await;
    mount_spreadsheet(&server).await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/abc:batchUpdate"))
        .and(body_json(json!({"requests": [
            {"updateSheetProperties": {"properties": {"sheetId": 42, "title": "Expenses"}, "fields": "title"}},
            {"addSheet": {"properties": {"title": "Notes"}}}
        ]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "abc",
            "replies": [{}, {"addSheet": {"properties": {"sheetId": 7, "title": "Notes"}}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut spreadsheet = api(&server).get_spreadsheet("abc").await.unwrap();
    spreadsheet.rename_sheet(42, "Expenses").unwrap();
    spreadsheet.add_sheet("Notes");
    assert_eq!(spreadsheet.pending().len(), 2);

    let response = spreadsheet.update().await.unwrap().unwrap();
    assert_eq!(response.spreadsheet_id.as_deref(), Some("abc"));
    assert_eq!(response.replies.len(), 2);
    assert!(spreadsheet.pending().is_empty());
    assert_eq!(spreadsheet.get_sheet_by_id(42).unwrap().title(), "Expenses");
}

#[tokio::test]
async fn test_empty_update_makes_no_call() {
    let server = MockServer::start().await;
    mount_spreadsheet(&server).await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/abc:batchUpdate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut spreadsheet = api(&server).get_spreadsheet("abc").await.unwrap();
    assert!(spreadsheet.update().await.unwrap().is_none());
}

#[tokio::test]
async fn test_scoped_flush() {
    let server = MockServer::start().await;
    mount_spreadsheet(&server).await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/abc:batchUpdate"))
        .and(body_json(json!({"requests": [{"deleteNamedRange": {"namedRangeId": "nr1"}}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"spreadsheetId": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut spreadsheet = api(&server).get_spreadsheet("abc").await.unwrap();
    let deleted = spreadsheet
        .scoped(|s| s.delete_named_range("nr1"))
        .await
        .unwrap();

    assert!(deleted.is_ok());
    assert!(spreadsheet.named_ranges().is_empty());
    assert!(spreadsheet.pending().is_empty());
}

#[tokio::test]
async fn test_failed_flush_keeps_queue() {
    let server = MockServer::start().await;
    mount_spreadsheet(&server).await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/abc:batchUpdate"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "Invalid requests[0].deleteSheet: No grid with id: 42", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let mut spreadsheet = api(&server).get_spreadsheet("abc").await.unwrap();
    spreadsheet.delete_sheet(42).unwrap();

    let err = spreadsheet.update().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::Api);
    assert_eq!(err.status(), Some(400));
    assert!(err.message.contains("No grid with id"));
    assert_eq!(spreadsheet.pending(), &[SheetsRequest::delete_sheet(42)]);

    spreadsheet.updates_mut().clear();
}

#[tokio::test]
async fn test_not_found_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": 404, "message": "Requested entity was not found.", "status": "NOT_FOUND"}
        })))
        .mount(&server)
        .await;

    let err = api(&server).get_spreadsheet("missing").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::Api);
    assert_eq!(err.status(), Some(404));
    assert!(err.message.contains("Requested entity was not found."));
}

#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/abc"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = api(&server).get_spreadsheet("abc").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::RateLimited);
}

#[tokio::test]
async fn test_create_spreadsheet_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets"))
        .and(body_json(json!({
            "properties": {"title": "Inventory", "locale": "en_GB"},
            "sheets": [
                {"properties": {"title": "NEW SHEET"}, "data": [{"rowData": [
                    {"values": [
                        {"userEnteredValue": {"stringValue": "item"}},
                        {"userEnteredValue": {"numberValue": 12.0}}
                    ]}
                ]}]},
                {"properties": {"title": "Archive"}, "data": [{"rowData": []}]}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "new1",
            "properties": {"title": "Inventory", "locale": "en_GB"},
            "sheets": [
                {"properties": {"sheetId": 0, "title": "NEW SHEET"}},
                {"properties": {"sheetId": 1, "title": "Archive"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sheets = [
        NewSheet::default().with_values(vec![vec!["item".to_string(), "12".to_string()]]),
        NewSheet::new("Archive"),
    ];
    let properties = SpreadsheetProperties {
        title: Some("Inventory".to_string()),
        locale: Some("en_GB".to_string()),
        ..Default::default()
    };

    let spreadsheet = api(&server)
        .create_spreadsheet(&sheets, properties)
        .await
        .unwrap();
    assert_eq!(spreadsheet.id(), "new1");
    assert_eq!(spreadsheet.sheet("NEW SHEET").unwrap().id(), 0);
}

#[tokio::test]
async fn test_get_range_and_append_block() {
    let server = MockServer::start().await;
    mount_spreadsheet(&server).await;

    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/abc/values/Sheet1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Sheet1",
            "values": [["name", "qty"]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/abc/values/Sheet1:append"))
        .and(query_param("valueInputOption", "USER_ENTERED"))
        .and(query_param("insertDataOption", "INSERT_ROWS"))
        .and(body_json(json!({"values": [["plums", "9"], ["figs", "2"]]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "abc",
            "tableRange": "Sheet1!A1:B1",
            "updates": {"updatedRange": "Sheet1!A2:B3", "updatedRows": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let spreadsheet = api(&server).get_spreadsheet("abc").await.unwrap();
    let block = spreadsheet.get_range("Sheet1").await.unwrap();
    assert_eq!(block.spreadsheet_id(), "abc");
    assert_eq!(block.range(), "Sheet1");

    let response = block
        .append(&[
            vec![json!("plums"), json!("9")],
            vec![json!("figs"), json!("2")],
        ])
        .await
        .unwrap();
    assert_eq!(response.updates.and_then(|u| u.updated_rows), Some(2));
    assert_eq!(block.len(), 1);
}

#[tokio::test]
async fn test_sheet_values_uses_quoted_title() {
    let server = MockServer::start().await;
    mount_spreadsheet(&server).await;

    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/abc/values/%27Costs%27"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Costs!A1:B2",
            "majorDimension": "ROWS",
            "values": [["rent", "900"], ["power", "80"]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let spreadsheet = api(&server).get_spreadsheet("abc").await.unwrap();
    let sheet = spreadsheet.sheet("Costs").unwrap();
    let block = sheet.values(&spreadsheet).await.unwrap();

    assert_eq!(block.range(), "Costs!A1:B2");
    assert_eq!(block.row(1), Some(&vec![json!("power"), json!("80")]));
}

#[tokio::test]
async fn test_named_range_get_block() {
    let server = MockServer::start().await;
    mount_spreadsheet(&server).await;

    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/abc/values/%27Costs%27%21A1%3AB2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Costs!A1:B2",
            "values": [["rent", "900"]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let spreadsheet = api(&server).get_spreadsheet("abc").await.unwrap();
    let totals = spreadsheet.get_named_range_by_id("nr1").unwrap();
    let block = totals.get_block(&spreadsheet).await.unwrap();

    assert_eq!(block.cells().count(), 2);
    assert_eq!(block[0][1], json!("900"));
}
