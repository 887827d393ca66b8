//! Google Sheets object layer
//!
//! `SheetsApi` fetches raw resources; `Spreadsheet`, `Sheet`, `NamedRange`
//! and `Block` wrap them for navigation and queued edits.

pub mod a1;
pub mod api;
pub mod block;
pub mod cells;
pub mod model;
pub mod named_range;
pub mod requests;
pub mod sheet;
pub mod spreadsheet;

pub use a1::{column_index, column_letters, grid_to_a1, quote_sheet_name};
pub use api::{SheetsApi, SHEETS_API_BASE};
pub use block::Block;
pub use cells::{cells_to_row, value_to_cell, CellData, ExtendedValue, NewSheet, RowData};
pub use model::{
    AppendValuesResponse, GridProperties, GridRange, NamedRangeResource, SheetProperties,
    SpreadsheetProperties, UpdateValuesResponse, ValueInputOption, ValueRange,
};
pub use named_range::NamedRange;
pub use requests::SheetsRequest;
pub use sheet::Sheet;
pub use spreadsheet::Spreadsheet;
