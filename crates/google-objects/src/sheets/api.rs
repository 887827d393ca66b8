//! Google Sheets API v4 Client
//!
//! Provides methods for interacting with Google Sheets API:
//! - Get/create spreadsheets
//! - Read, overwrite and append cell values
//! - Submit batched structural updates

use serde_json::{json, Value};
use tracing::{debug, info};

use super::block::Block;
use super::cells::NewSheet;
use super::model::{
    AppendValuesResponse, SpreadsheetProperties, UpdateValuesResponse, ValueInputOption, ValueRange,
};
use super::requests::SheetsRequest;
use super::spreadsheet::Spreadsheet;
use crate::common::{GoogleError, GoogleResult};
use crate::google::{BatchUpdateRequest, BatchUpdateResponse, GoogleClient};

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

#[derive(Debug, Clone)]
pub struct SheetsApi {
    client: GoogleClient,
    base_url: String,
}

crate::google::google_api_wrapper!(SheetsApi, SHEETS_API_BASE, sheets_base_url);

fn parse<T: serde::de::DeserializeOwned>(raw: Value, what: &str) -> GoogleResult<T> {
    serde_json::from_value(raw)
        .map_err(|e| GoogleError::parse(format!("Unexpected {} payload: {}", what, e)))
}

impl SheetsApi {
    fn spreadsheet_url(&self, spreadsheet_id: &str) -> String {
        format!(
            "{}/spreadsheets/{}",
            self.base_url,
            urlencoding::encode(spreadsheet_id)
        )
    }

    fn values_url(&self, spreadsheet_id: &str, range: &str) -> String {
        format!(
            "{}/values/{}",
            self.spreadsheet_url(spreadsheet_id),
            urlencoding::encode(range)
        )
    }

    /// Fetch a spreadsheet and wrap it
    pub async fn get_spreadsheet(&self, spreadsheet_id: &str) -> GoogleResult<Spreadsheet> {
        info!("Fetching spreadsheet: {}", spreadsheet_id);

        let raw = self
            .client
            .get(&self.spreadsheet_url(spreadsheet_id), &[])
            .await?;
        Spreadsheet::from_resource(self.clone(), raw)
    }

    /// Create a spreadsheet with the given sheets
    ///
    /// # Arguments
    /// * `sheets` - Sheets to create, with optional initial values
    /// * `properties` - Spreadsheet properties (title, locale, time zone)
    pub async fn create_spreadsheet(
        &self,
        sheets: &[NewSheet],
        properties: SpreadsheetProperties,
    ) -> GoogleResult<Spreadsheet> {
        info!("Creating spreadsheet with {} sheet(s)", sheets.len());

        let body = json!({
            "properties": properties,
            "sheets": sheets.iter().map(NewSheet::format).collect::<Vec<_>>(),
        });

        let url = format!("{}/spreadsheets", self.base_url);
        let raw = self.client.post(&url, &[], &body).await?;
        Spreadsheet::from_resource(self.clone(), raw)
    }

    /// Read a range and wrap it as a `Block`
    ///
    /// # Arguments
    /// * `spreadsheet_id` - Spreadsheet ID
    /// * `range` - Range in A1 notation, or a sheet title
    pub async fn get_values(&self, spreadsheet_id: &str, range: &str) -> GoogleResult<Block> {
        info!("Reading {} from spreadsheet: {}", range, spreadsheet_id);

        let raw = self
            .client
            .get(&self.values_url(spreadsheet_id, range), &[])
            .await?;
        let value_range: ValueRange = parse(raw, "ValueRange")?;

        debug!("Retrieved {} row(s)", value_range.values.len());
        Ok(Block::from_value_range(
            self.clone(),
            spreadsheet_id,
            value_range,
        ))
    }

    /// Overwrite the values of a range
    pub async fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &[Vec<Value>],
        option: ValueInputOption,
    ) -> GoogleResult<UpdateValuesResponse> {
        info!("Updating {} in spreadsheet: {}", range, spreadsheet_id);

        let raw = self
            .client
            .put(
                &self.values_url(spreadsheet_id, range),
                &[("valueInputOption", option.as_str().to_string())],
                &json!({ "values": values }),
            )
            .await?;
        parse(raw, "UpdateValuesResponse")
    }

    /// Append rows after the table found in `range`
    pub async fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &[Vec<Value>],
    ) -> GoogleResult<AppendValuesResponse> {
        info!("Appending {} row(s) to {} in spreadsheet: {}", values.len(), range, spreadsheet_id);

        let url = format!("{}:append", self.values_url(spreadsheet_id, range));
        let raw = self
            .client
            .post(
                &url,
                &[
                    ("valueInputOption", ValueInputOption::UserEntered.as_str().to_string()),
                    ("insertDataOption", "INSERT_ROWS".to_string()),
                ],
                &json!({ "values": values }),
            )
            .await?;
        parse(raw, "AppendValuesResponse")
    }

    /// Submit a list of requests as one `batchUpdate`
    pub async fn push_updates(
        &self,
        spreadsheet_id: &str,
        requests: &[SheetsRequest],
    ) -> GoogleResult<BatchUpdateResponse> {
        info!(
            "Submitting {} request(s) to spreadsheet: {}",
            requests.len(),
            spreadsheet_id
        );

        let url = format!("{}:batchUpdate", self.spreadsheet_url(spreadsheet_id));
        let raw = self
            .client
            .post(&url, &[], &BatchUpdateRequest { requests })
            .await?;
        parse(raw, "BatchUpdateResponse")
    }
}
