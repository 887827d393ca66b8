//! Slides v1 resource shapes
//!
//! Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A magnitude in a single direction in the specified units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub magnitude: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

/// Affine transform mapping the element onto the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffineTransform {
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub shear_x: Option<f64>,
    pub shear_y: Option<f64>,
    pub translate_x: Option<f64>,
    pub translate_y: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub start_index: Option<u32>,
    pub end_index: Option<u32>,
    pub text_run: Option<TextRun>,
    /// Same shape as a run (`content`), e.g. slide numbers
    pub auto_text: Option<TextRun>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    #[serde(default)]
    pub text_elements: Vec<TextElement>,
}

impl TextContent {
    /// Plain text of all runs, in order
    pub fn raw_text(&self) -> String {
        self.text_elements
            .iter()
            .filter_map(|e| e.text_run.as_ref().or(e.auto_text.as_ref()))
            .map(|run| run.content.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeResource {
    pub shape_type: Option<String>,
    pub text: Option<TextContent>,
}

/// Location of a cell within a table. The API omits zero indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellLocation {
    #[serde(default)]
    pub row_index: u32,
    #[serde(default)]
    pub column_index: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellResource {
    pub location: Option<TableCellLocation>,
    pub row_span: Option<u32>,
    pub column_span: Option<u32>,
    pub text: Option<TextContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRowResource {
    #[serde(default)]
    pub table_cells: Vec<TableCellResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResource {
    #[serde(default)]
    pub rows: u32,
    #[serde(default)]
    pub columns: u32,
    #[serde(default)]
    pub table_rows: Vec<TableRowResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResource {
    #[serde(default)]
    pub children: Vec<PageElementResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageElementResource {
    pub object_id: String,
    pub size: Option<Size>,
    pub transform: Option<AffineTransform>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub shape: Option<ShapeResource>,
    pub table: Option<TableResource>,
    pub element_group: Option<GroupResource>,
    pub image: Option<Value>,
    pub video: Option<Value>,
    pub word_art: Option<Value>,
    pub sheets_chart: Option<Value>,
    pub line: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResource {
    pub object_id: String,
    pub page_type: Option<String>,
    #[serde(default)]
    pub page_elements: Vec<PageElementResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationResource {
    pub presentation_id: String,
    pub title: Option<String>,
    pub locale: Option<String>,
    pub page_size: Option<Size>,
    #[serde(default)]
    pub slides: Vec<PageResource>,
    #[serde(default)]
    pub masters: Vec<PageResource>,
    #[serde(default)]
    pub layouts: Vec<PageResource>,
}
