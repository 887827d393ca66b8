//! Sheets v4 resource shapes
//!
//! Field names follow the REST API; serde maps camelCase JSON keys onto the
//! snake_case fields. Unknown keys are ignored.
//!
//! Derived from: https://developers.google.com/sheets/api/reference/rest/v4/spreadsheets

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadsheetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_recalc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen_row_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen_column_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_properties: Option<GridProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

/// A rectangle on a sheet. Start indices are inclusive, end indices
/// exclusive; a missing index means unbounded on that side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_row_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_row_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_column_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column_index: Option<u32>,
}

impl GridRange {
    /// Fully bounded range on `sheet_id`
    pub fn bounded(sheet_id: i64, rows: std::ops::Range<u32>, columns: std::ops::Range<u32>) -> Self {
        Self {
            sheet_id: Some(sheet_id),
            start_row_index: Some(rows.start),
            end_row_index: Some(rows.end),
            start_column_index: Some(columns.start),
            end_column_index: Some(columns.end),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRangeResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_range_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub range: GridRange,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetResource {
    #[serde(default)]
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadsheetResource {
    pub spreadsheet_id: String,
    #[serde(default)]
    pub properties: SpreadsheetProperties,
    #[serde(default)]
    pub sheets: Vec<SheetResource>,
    #[serde(default)]
    pub named_ranges: Vec<NamedRangeResource>,
    pub spreadsheet_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    pub spreadsheet_id: Option<String>,
    pub updated_range: Option<String>,
    pub updated_rows: Option<u32>,
    pub updated_columns: Option<u32>,
    pub updated_cells: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendValuesResponse {
    pub spreadsheet_id: Option<String>,
    pub table_range: Option<String>,
    pub updates: Option<UpdateValuesResponse>,
}

/// How the API interprets written values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueInputOption {
    #[default]
    Raw,
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spreadsheet_resource_from_camel_case() {
        let resource: SpreadsheetResource = serde_json::from_value(json!({
            "spreadsheetId": "abc",
            "properties": {"title": "Budget", "timeZone": "Europe/Dublin"},
            "sheets": [{"properties": {"sheetId": 7, "title": "Q1", "gridProperties": {"rowCount": 100, "columnCount": 26}}}],
            "namedRanges": [{"namedRangeId": "nr1", "name": "totals", "range": {"startRowIndex": 0}}],
            "spreadsheetUrl": "https://docs.google.com/spreadsheets/d/abc/edit"
        }))
        .unwrap();

        assert_eq!(resource.properties.time_zone.as_deref(), Some("Europe/Dublin"));
        let grid = resource.sheets[0].properties.grid_properties.as_ref().unwrap();
        assert_eq!(grid.column_count, Some(26));
        assert_eq!(resource.named_ranges[0].range.start_row_index, Some(0));
        assert_eq!(resource.named_ranges[0].range.sheet_id, None);
    }

    #[test]
    fn test_properties_skip_unset_fields() {
        let props = SheetProperties {
            sheet_id: Some(3),
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(props).unwrap(),
            json!({"sheetId": 3, "title": "Renamed"})
        );
    }

    #[test]
    fn test_value_range_without_values() {
        let range: ValueRange =
            serde_json::from_value(json!({"range": "Sheet1!A1:Z1000", "majorDimension": "ROWS"}))
                .unwrap();
        assert!(range.values.is_empty());
    }
}
