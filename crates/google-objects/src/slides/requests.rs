//! `presentations.batchUpdate` request builders

use serde::Serialize;
use serde_json::Value;

use super::model::TableCellLocation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstringMatchCriteria {
    pub text: String,
    pub match_case: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeType {
    All,
    FixedRange,
    FromStartIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    #[serde(rename = "type")]
    pub range_type: RangeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<u32>,
}

impl TextRange {
    pub fn all() -> Self {
        Self {
            range_type: RangeType::All,
            start_index: None,
            end_index: None,
        }
    }
}

/// One entry of a Slides `batchUpdate` request list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SlidesRequest {
    ReplaceAllText {
        contains_text: SubstringMatchCriteria,
        replace_text: String,
    },
    DeleteObject {
        object_id: String,
    },
    DeleteText {
        object_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        cell_location: Option<TableCellLocation>,
        text_range: TextRange,
    },
    InsertText {
        object_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        cell_location: Option<TableCellLocation>,
        text: String,
        insertion_index: u32,
    },
    /// Any request this enum doesn't model, passed through as-is
    #[serde(untagged)]
    Raw(Value),
}

impl SlidesRequest {
    /// Presentation-wide find and replace
    pub fn replace_all_text(
        find: impl Into<String>,
        replace: impl Into<String>,
        match_case: bool,
    ) -> Self {
        SlidesRequest::ReplaceAllText {
            contains_text: SubstringMatchCriteria {
                text: find.into(),
                match_case,
            },
            replace_text: replace.into(),
        }
    }

    pub fn delete_object(object_id: impl Into<String>) -> Self {
        SlidesRequest::DeleteObject {
            object_id: object_id.into(),
        }
    }

    /// Delete all text in a shape, or in one table cell
    pub fn delete_text(object_id: impl Into<String>, cell_location: Option<TableCellLocation>) -> Self {
        SlidesRequest::DeleteText {
            object_id: object_id.into(),
            cell_location,
            text_range: TextRange::all(),
        }
    }

    /// Insert text at the start of a shape, or of one table cell
    pub fn insert_text(
        object_id: impl Into<String>,
        cell_location: Option<TableCellLocation>,
        text: impl Into<String>,
    ) -> Self {
        SlidesRequest::InsertText {
            object_id: object_id.into(),
            cell_location,
            text: text.into(),
            insertion_index: 0,
        }
    }
}
