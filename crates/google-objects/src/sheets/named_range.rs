//! NamedRange
//!
//! A named grid range that can render itself in A1 notation.

use super::block::Block;
use super::model::{GridRange, NamedRangeResource};
use super::spreadsheet::Spreadsheet;
use crate::common::{GoogleError, GoogleResult};

#[derive(Debug, Clone, PartialEq)]
pub struct NamedRange {
    id: Option<String>,
    name: String,
    range: GridRange,
}

impl NamedRange {
    /// Wrap a resource; a missing sheet ID means the first sheet (ID 0)
    pub fn from_resource(mut resource: NamedRangeResource) -> Self {
        if resource.range.sheet_id.is_none() {
            resource.range.sheet_id = Some(0);
        }

        Self {
            id: resource.named_range_id,
            name: resource.name,
            range: resource.range,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> &GridRange {
        &self.range
    }

    pub fn sheet_id(&self) -> i64 {
        self.range.sheet_id.unwrap_or(0)
    }

    pub fn start_row(&self) -> Option<u32> {
        self.range.start_row_index
    }

    pub fn end_row(&self) -> Option<u32> {
        self.range.end_row_index
    }

    pub fn start_column(&self) -> Option<u32> {
        self.range.start_column_index
    }

    pub fn end_column(&self) -> Option<u32> {
        self.range.end_column_index
    }

    /// Title of the sheet this range lives on
    pub fn sheet_name<'a>(&self, spreadsheet: &'a Spreadsheet) -> Option<&'a str> {
        spreadsheet.get_sheet_by_id(self.sheet_id()).map(|s| s.title())
    }

    /// The range in A1 notation, e.g. `'Sheet1'!A1:C10`
    pub fn as_a1(&self, spreadsheet: &Spreadsheet) -> GoogleResult<String> {
        let sheet = spreadsheet
            .get_sheet_by_id(self.sheet_id())
            .ok_or_else(|| GoogleError::not_found("sheet", self.sheet_id()))?;

        self.range.to_a1(sheet.title(), sheet.grid())
    }

    /// Fetch the range's values
    pub async fn get_block(&self, spreadsheet: &Spreadsheet) -> GoogleResult<Block> {
        let range = self.as_a1(spreadsheet)?;
        spreadsheet.get_range(&range).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_accessors() {
        let range = NamedRange::from_resource(NamedRangeResource {
            named_range_id: Some("nr".to_string()),
            name: "header".to_string(),
            range: GridRange {
                start_row_index: Some(0),
                end_row_index: Some(1),
                ..Default::default()
            },
        });

        assert_eq!(range.sheet_id(), 0);
        assert_eq!(range.range().sheet_id, Some(0));
        assert_eq!(range.start_row(), Some(0));
        assert_eq!(range.end_row(), Some(1));
        assert_eq!(range.start_column(), None);
        assert_eq!(range.end_column(), None);
    }
}
