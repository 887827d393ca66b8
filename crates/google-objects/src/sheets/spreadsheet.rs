//! Spreadsheet
//!
//! Wraps a `spreadsheets.get` payload. Navigation reads the local copy;
//! structural edits are queued and sent with [`BatchUpdate::update`].

use serde_json::Value;
use tracing::{debug, warn};

use super::api::SheetsApi;
use super::block::Block;
use super::model::{GridRange, NamedRangeResource, SpreadsheetProperties, SpreadsheetResource};
use super::named_range::NamedRange;
use super::requests::SheetsRequest;
use super::sheet::Sheet;
use crate::common::{GoogleError, GoogleResult};
use crate::google::{BatchUpdate, BatchUpdateResponse, UpdateQueue};

/// A Google Sheets spreadsheet
#[derive(Debug)]
pub struct Spreadsheet {
    api: SheetsApi,
    id: String,
    properties: SpreadsheetProperties,
    url: Option<String>,
    sheets: Vec<Sheet>,
    named_ranges: Vec<NamedRangeResource>,
    updates: UpdateQueue<SheetsRequest>,
}

impl Spreadsheet {
    /// Wrap a raw `Spreadsheet` resource
    pub fn from_resource(api: SheetsApi, raw: Value) -> GoogleResult<Self> {
        let resource: SpreadsheetResource = serde_json::from_value(raw)
            .map_err(|e| GoogleError::parse(format!("Unexpected Spreadsheet payload: {}", e)))?;

        debug!(
            "Loaded spreadsheet {} with {} sheet(s)",
            resource.spreadsheet_id,
            resource.sheets.len()
        );

        Ok(Self {
            api,
            id: resource.spreadsheet_id,
            properties: resource.properties,
            url: resource.spreadsheet_url,
            sheets: resource
                .sheets
                .into_iter()
                .map(|s| Sheet::new(s.properties))
                .collect(),
            named_ranges: resource.named_ranges,
            updates: UpdateQueue::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.properties.title.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.properties.locale.as_deref()
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.properties.time_zone.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn properties(&self) -> &SpreadsheetProperties {
        &self.properties
    }

    pub fn api(&self) -> &SheetsApi {
        &self.api
    }

    /// Rename the spreadsheet and queue the matching request
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.properties.title = Some(title.clone());
        self.add_update(SheetsRequest::set_title(title));
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sheet> {
        self.sheets.iter()
    }

    pub fn get_sheet_by_id(&self, sheet_id: i64) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.id() == sheet_id)
    }

    pub fn get_sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.title() == name)
    }

    /// Look a sheet up by key: all-digit keys are sheet IDs, anything else a title
    pub fn sheet(&self, key: &str) -> GoogleResult<&Sheet> {
        let by_id = if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
            key.parse::<i64>().ok().and_then(|id| self.get_sheet_by_id(id))
        } else {
            None
        };

        by_id
            .or_else(|| self.get_sheet_by_name(key))
            .ok_or_else(|| GoogleError::not_found("sheet", key))
    }

    /// Rename a sheet locally and queue `updateSheetProperties`
    pub fn rename_sheet(&mut self, sheet_id: i64, title: impl Into<String>) -> GoogleResult<()> {
        let title = title.into();
        let sheet = self
            .sheets
            .iter_mut()
            .find(|s| s.id() == sheet_id)
            .ok_or_else(|| GoogleError::not_found("sheet", sheet_id))?;

        sheet.set_title(title.clone());
        self.add_update(SheetsRequest::rename_sheet(sheet_id, title));
        Ok(())
    }

    /// Queue `addSheet`; the new sheet appears after the next fetch
    pub fn add_sheet(&mut self, title: impl Into<String>) {
        self.add_update(SheetsRequest::add_sheet(title));
    }

    /// Remove a sheet locally and queue `deleteSheet`
    pub fn delete_sheet(&mut self, sheet_id: i64) -> GoogleResult<()> {
        let position = self
            .sheets
            .iter()
            .position(|s| s.id() == sheet_id)
            .ok_or_else(|| GoogleError::not_found("sheet", sheet_id))?;

        self.sheets.remove(position);
        self.add_update(SheetsRequest::delete_sheet(sheet_id));
        Ok(())
    }

    /// Queue `appendCells` with encoded values
    pub fn append_rows<S: AsRef<str>>(&mut self, sheet_id: i64, rows: &[Vec<S>]) -> GoogleResult<()> {
        if self.get_sheet_by_id(sheet_id).is_none() {
            return Err(GoogleError::not_found("sheet", sheet_id));
        }

        self.add_update(SheetsRequest::append_cells(sheet_id, rows));
        Ok(())
    }

    /// Named ranges; a range without a sheet ID belongs to sheet 0
    pub fn named_ranges(&self) -> Vec<NamedRange> {
        self.named_ranges
            .iter()
            .cloned()
            .map(NamedRange::from_resource)
            .collect()
    }

    pub fn get_named_range_by_name(&self, name: &str) -> Option<NamedRange> {
        self.named_ranges().into_iter().find(|r| r.name() == name)
    }

    pub fn get_named_range_by_id(&self, named_range_id: &str) -> Option<NamedRange> {
        self.named_ranges()
            .into_iter()
            .find(|r| r.id() == Some(named_range_id))
    }

    /// Queue `addNamedRange`
    pub fn add_named_range(&mut self, name: impl Into<String>, range: GridRange) {
        self.add_update(SheetsRequest::add_named_range(name, range));
    }

    /// Forget a named range locally and queue `deleteNamedRange`
    pub fn delete_named_range(&mut self, named_range_id: &str) -> GoogleResult<()> {
        let position = self
            .named_ranges
            .iter()
            .position(|r| r.named_range_id.as_deref() == Some(named_range_id))
            .ok_or_else(|| GoogleError::not_found("named range", named_range_id))?;

        self.named_ranges.remove(position);
        self.add_update(SheetsRequest::delete_named_range(named_range_id));
        Ok(())
    }

    /// Fetch `range` (A1 notation) as a `Block`
    pub async fn get_range(&self, range: &str) -> GoogleResult<Block> {
        self.api.get_values(&self.id, range).await
    }
}

impl BatchUpdate for Spreadsheet {
    type Request = SheetsRequest;

    fn updates(&self) -> &UpdateQueue<SheetsRequest> {
        &self.updates
    }

    fn updates_mut(&mut self) -> &mut UpdateQueue<SheetsRequest> {
        &mut self.updates
    }

    async fn push_updates(&self, requests: &[SheetsRequest]) -> GoogleResult<BatchUpdateResponse> {
        self.api.push_updates(&self.id, requests).await
    }
}

impl<'a> IntoIterator for &'a Spreadsheet {
    type Item = &'a Sheet;
    type IntoIter = std::slice::Iter<'a, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.iter()
    }
}

impl Drop for Spreadsheet {
    fn drop(&mut self) {
        if !self.updates.is_empty() {
            warn!(
                "Spreadsheet {} dropped with {} unsent update(s)",
                self.id,
                self.updates.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::google::GoogleClient;
    use serde_json::json;

    fn fixture() -> Spreadsheet {
        let api = SheetsApi::new(GoogleClient::new("test").unwrap());
        Spreadsheet::from_resource(
            api,
            json!({
                "spreadsheetId": "ss1",
                "properties": {"title": "Budget", "locale": "en_GB"},
                "sheets": [
                    {"properties": {"sheetId": 0, "title": "Summary", "index": 0}},
                    {"properties": {"sheetId": 1234, "title": "2024", "index": 1}}
                ],
                "namedRanges": [
                    {"namedRangeId": "nr1", "name": "totals", "range": {"startRowIndex": 0, "endRowIndex": 1, "startColumnIndex": 0, "endColumnIndex": 2}},
                    {"namedRangeId": "nr2", "name": "years", "range": {"sheetId": 1234, "startColumnIndex": 0, "endColumnIndex": 1}}
                ]
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_navigation() {
        let ss = fixture();
        assert_eq!(ss.id(), "ss1");
        assert_eq!(ss.title(), Some("Budget"));
        assert_eq!(ss.locale(), Some("en_GB"));
        assert_eq!(ss.iter().count(), 2);
        assert_eq!(ss.get_sheet_by_name("Summary").map(Sheet::id), Some(0));
        assert!(ss.get_sheet_by_id(99).is_none());
    }

    #[test]
    fn test_sheet_key_lookup() {
        let ss = fixture();
        assert_eq!(ss.sheet("1234").unwrap().title(), "2024");
        assert_eq!(ss.sheet("Summary").unwrap().id(), 0);
        // digits that aren't an ID fall back to a title lookup
        assert_eq!(ss.sheet("2024").unwrap().id(), 1234);

        let err = ss.sheet("Missing").unwrap_err();
        assert_eq!(err.code, crate::common::ErrorCode::NotFound);
    }

    #[test]
    fn test_named_ranges_default_sheet() {
        let ss = fixture();
        let totals = ss.get_named_range_by_name("totals").unwrap();
        assert_eq!(totals.sheet_id(), 0);
        assert_eq!(totals.as_a1(&ss).unwrap(), "'Summary'!A1:B1");

        let years = ss.get_named_range_by_id("nr2").unwrap();
        assert_eq!(years.sheet_name(&ss), Some("2024"));
        assert_eq!(years.as_a1(&ss).unwrap(), "'2024'!A:A");
        assert!(ss.get_named_range_by_name("nope").is_none());
    }

    #[test]
    fn test_edits_queue_requests() {
        let mut ss = fixture();
        ss.set_title("Budget 2025");
        ss.rename_sheet(1234, "2025").unwrap();
        ss.delete_sheet(0).unwrap();
        ss.add_sheet("Notes");

        assert_eq!(ss.title(), Some("Budget 2025"));
        assert_eq!(ss.sheets().len(), 1);
        assert_eq!(ss.sheets()[0].title(), "2025");
        assert_eq!(
            ss.pending(),
            &[
                SheetsRequest::set_title("Budget 2025"),
                SheetsRequest::rename_sheet(1234, "2025"),
                SheetsRequest::delete_sheet(0),
                SheetsRequest::add_sheet("Notes"),
            ]
        );

        assert!(ss.rename_sheet(0, "gone").is_err());
        assert_eq!(ss.pending().len(), 4);
        ss.updates_mut().clear();
    }

    #[test]
    fn test_named_range_edits() {
        let mut ss = fixture();
        ss.delete_named_range("nr1").unwrap();
        assert!(ss.get_named_range_by_id("nr1").is_none());
        assert!(ss.delete_named_range("nr1").is_err());

        ss.add_named_range("area", GridRange::bounded(0, 0..5, 0..5));
        ss.append_rows(1234, &[vec!["2026", "open"]]).unwrap();
        assert!(ss.append_rows(77, &[vec!["x"]]).is_err());
        assert_eq!(ss.pending().len(), 3);
        ss.updates_mut().clear();
    }
}
