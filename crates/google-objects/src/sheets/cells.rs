//! Cell value encoding
//!
//! Turns plain strings into `CellData` / `RowData` payloads for
//! `spreadsheets.create` and `appendCells`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Title given to new sheets that don't specify one
pub const DEFAULT_SHEET_TITLE: &str = "NEW SHEET";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtendedValue {
    NumberValue(f64),
    StringValue(String),
    BoolValue(bool),
    FormulaValue(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_entered_value: Option<ExtendedValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowData {
    #[serde(default)]
    pub values: Vec<CellData>,
}

/// Encode a single value; all-digit strings become numbers.
///
/// Digit strings too long for a finite `f64` stay strings.
pub fn value_to_cell(val: &str) -> CellData {
    let is_number = !val.is_empty() && val.bytes().all(|b| b.is_ascii_digit());

    let value = match val.parse::<f64>() {
        Ok(n) if is_number && n.is_finite() => ExtendedValue::NumberValue(n),
        _ => ExtendedValue::StringValue(val.to_string()),
    };

    CellData {
        user_entered_value: Some(value),
    }
}

pub fn cells_to_row<S: AsRef<str>>(cells: &[S]) -> RowData {
    RowData {
        values: cells.iter().map(|c| value_to_cell(c.as_ref())).collect(),
    }
}

/// A sheet to create along with a new spreadsheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSheet {
    pub title: Option<String>,
    pub values: Vec<Vec<String>>,
}

impl NewSheet {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            values: Vec::new(),
        }
    }

    pub fn with_values(mut self, values: Vec<Vec<String>>) -> Self {
        self.values = values;
        self
    }

    /// `Sheet` resource body for `spreadsheets.create`
    pub fn format(&self) -> Value {
        let title = self.title.as_deref().unwrap_or(DEFAULT_SHEET_TITLE);
        let rows: Vec<RowData> = self.values.iter().map(|row| cells_to_row(row.as_slice())).collect();

        json!({
            "properties": { "title": title },
            "data": [{ "rowData": rows }]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_digits_become_numbers() {
        assert_eq!(
            serde_json::to_value(value_to_cell("42")).unwrap(),
            json!({"userEnteredValue": {"numberValue": 42.0}})
        );
    }

    #[test]
    fn test_other_values_stay_strings() {
        for raw in ["", "-3", "4.5", "12a", "hello"] {
            assert_eq!(
                value_to_cell(raw).user_entered_value,
                Some(ExtendedValue::StringValue(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_overflowing_digits_stay_strings() {
        let huge = "9".repeat(400);
        assert_eq!(
            serde_json::to_value(value_to_cell(&huge)).unwrap(),
            json!({"userEnteredValue": {"stringValue": huge}})
        );
    }

    #[test]
    fn test_new_sheet_format_defaults_title() {
        let sheet = NewSheet::default().with_values(vec![vec!["name".into(), "7".into()]]);

        assert_eq!(
            sheet.format(),
            json!({
                "properties": {"title": "NEW SHEET"},
                "data": [{"rowData": [{"values": [
                    {"userEnteredValue": {"stringValue": "name"}},
                    {"userEnteredValue": {"numberValue": 7.0}}
                ]}]}]
            })
        );
    }
}
