//! `spreadsheets.batchUpdate` request builders

use serde::Serialize;
use serde_json::Value;

use super::cells::{cells_to_row, RowData};
use super::model::{GridRange, NamedRangeResource, SheetProperties, SpreadsheetProperties};

/// One entry of a Sheets `batchUpdate` request list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SheetsRequest {
    UpdateSpreadsheetProperties {
        properties: SpreadsheetProperties,
        fields: String,
    },
    UpdateSheetProperties {
        properties: SheetProperties,
        fields: String,
    },
    AddSheet {
        properties: SheetProperties,
    },
    DeleteSheet {
        sheet_id: i64,
    },
    AddNamedRange {
        named_range: NamedRangeResource,
    },
    DeleteNamedRange {
        named_range_id: String,
    },
    AppendCells {
        sheet_id: i64,
        rows: Vec<RowData>,
        fields: String,
    },
    /// Any request this enum doesn't model, passed through as-is
    #[serde(untagged)]
    Raw(Value),
}

impl SheetsRequest {
    pub fn set_title(title: impl Into<String>) -> Self {
        SheetsRequest::UpdateSpreadsheetProperties {
            properties: SpreadsheetProperties {
                title: Some(title.into()),
                ..Default::default()
            },
            fields: "title".to_string(),
        }
    }

    pub fn rename_sheet(sheet_id: i64, title: impl Into<String>) -> Self {
        SheetsRequest::UpdateSheetProperties {
            properties: SheetProperties {
                sheet_id: Some(sheet_id),
                title: Some(title.into()),
                ..Default::default()
            },
            fields: "title".to_string(),
        }
    }

    pub fn add_sheet(title: impl Into<String>) -> Self {
        SheetsRequest::AddSheet {
            properties: SheetProperties {
                title: Some(title.into()),
                ..Default::default()
            },
        }
    }

    pub fn delete_sheet(sheet_id: i64) -> Self {
        SheetsRequest::DeleteSheet { sheet_id }
    }

    pub fn add_named_range(name: impl Into<String>, range: GridRange) -> Self {
        SheetsRequest::AddNamedRange {
            named_range: NamedRangeResource {
                named_range_id: None,
                name: name.into(),
                range,
            },
        }
    }

    pub fn delete_named_range(named_range_id: impl Into<String>) -> Self {
        SheetsRequest::DeleteNamedRange {
            named_range_id: named_range_id.into(),
        }
    }

    /// Append rows after the last row with data, encoding each cell
    pub fn append_cells<S: AsRef<str>>(sheet_id: i64, rows: &[Vec<S>]) -> Self {
        SheetsRequest::AppendCells {
            sheet_id,
            rows: rows.iter().map(|row| cells_to_row(row.as_slice())).collect(),
            fields: "userEnteredValue".to_string(),
        }
    }
}
