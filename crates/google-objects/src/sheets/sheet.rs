//! Sheet
//!
//! Little behaviour of its own; mostly a reference for building blocks.

use super::a1::quote_sheet_name;
use super::block::Block;
use super::model::{GridProperties, SheetProperties};
use super::spreadsheet::Spreadsheet;
use crate::common::GoogleResult;

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    properties: SheetProperties,
}

impl Sheet {
    pub fn new(properties: SheetProperties) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &SheetProperties {
        &self.properties
    }

    /// Sheet ID; the API leaves it out for the first sheet in some payloads
    pub fn id(&self) -> i64 {
        self.properties.sheet_id.unwrap_or(0)
    }

    pub fn title(&self) -> &str {
        self.properties.title.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.title()
    }

    pub fn index(&self) -> Option<u32> {
        self.properties.index
    }

    pub fn grid(&self) -> Option<&GridProperties> {
        self.properties.grid_properties.as_ref()
    }

    /// Local rename only; see [`Spreadsheet::rename_sheet`] to queue it
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.properties.title = Some(title.into());
    }

    /// All data on this sheet as a `Block`
    pub async fn values(&self, spreadsheet: &Spreadsheet) -> GoogleResult<Block> {
        spreadsheet.get_range(&quote_sheet_name(self.title())).await
    }
}
