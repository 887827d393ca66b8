//! Page elements
//!
//! Shared metadata for everything on a page, plus shapes. Edits update the
//! local copy and return the requests that apply them server-side; the
//! caller queues those on the presentation.

use regex::Regex;

use super::model::{AffineTransform, PageElementResource, ShapeResource, Size, TableCellLocation};
use super::requests::SlidesRequest;
use super::table::Table;
use crate::common::{GoogleError, GoogleResult};

/// Requests that turn `current` into `new`, updating `current` to match
pub(crate) fn edit_text(
    object_id: &str,
    cell_location: Option<TableCellLocation>,
    current: &mut Option<String>,
    new: &str,
) -> Vec<SlidesRequest> {
    let mut requests = Vec::new();

    if current.as_deref().is_some_and(|t| !t.is_empty()) {
        requests.push(SlidesRequest::delete_text(object_id, cell_location));
    }
    if !new.is_empty() {
        requests.push(SlidesRequest::insert_text(object_id, cell_location, new));
    }

    *current = Some(new.to_string()).filter(|t| !t.is_empty());
    requests
}

pub(crate) fn matches(re: &Regex, text: Option<&str>) -> Vec<String> {
    text.map(|t| {
        re.find_iter(t)
            .filter(|m| !m.as_str().is_empty())
            .map(|m| m.as_str().to_string())
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    shape_type: Option<String>,
    text: Option<String>,
}

impl Shape {
    pub(crate) fn from_resource(resource: ShapeResource) -> Self {
        let text = resource
            .text
            .map(|t| t.raw_text())
            .filter(|t| !t.is_empty());

        Self {
            shape_type: resource.shape_type,
            text,
        }
    }

    pub fn shape_type(&self) -> Option<&str> {
        self.shape_type.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Every match of `re` in the shape's text
    pub fn seek(&self, re: &Regex) -> Vec<String> {
        matches(re, self.text())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Shape(Shape),
    Table(Table),
    Image,
    Video,
    WordArt,
    SheetsChart,
    Line,
    Other,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Shape(_) => "shape",
            ElementKind::Table(_) => "table",
            ElementKind::Image => "image",
            ElementKind::Video => "video",
            ElementKind::WordArt => "wordArt",
            ElementKind::SheetsChart => "sheetsChart",
            ElementKind::Line => "line",
            ElementKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
    object_id: String,
    size: Option<Size>,
    transform: Option<AffineTransform>,
    title: Option<String>,
    description: Option<String>,
    kind: ElementKind,
}

impl PageElement {
    /// Convert a resource, flattening element groups into `out`
    pub(crate) fn load(resource: PageElementResource, out: &mut Vec<PageElement>) {
        if let Some(group) = resource.element_group {
            for child in group.children {
                PageElement::load(child, out);
            }
            return;
        }

        let kind = if let Some(shape) = resource.shape {
            ElementKind::Shape(Shape::from_resource(shape))
        } else if let Some(table) = resource.table {
            ElementKind::Table(Table::from_resource(table))
        } else if resource.image.is_some() {
            ElementKind::Image
        } else if resource.video.is_some() {
            ElementKind::Video
        } else if resource.word_art.is_some() {
            ElementKind::WordArt
        } else if resource.sheets_chart.is_some() {
            ElementKind::SheetsChart
        } else if resource.line.is_some() {
            ElementKind::Line
        } else {
            ElementKind::Other
        };

        out.push(PageElement {
            object_id: resource.object_id,
            size: resource.size,
            transform: resource.transform,
            title: resource.title,
            description: resource.description,
            kind,
        });
    }

    pub fn id(&self) -> &str {
        &self.object_id
    }

    pub fn size(&self) -> Option<&Size> {
        self.size.as_ref()
    }

    pub fn transform(&self) -> Option<&AffineTransform> {
        self.transform.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn as_shape(&self) -> Option<&Shape> {
        match &self.kind {
            ElementKind::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_shape_mut(&mut self) -> Option<&mut Shape> {
        match &mut self.kind {
            ElementKind::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match &self.kind {
            ElementKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.kind {
            ElementKind::Table(table) => Some(table),
            _ => None,
        }
    }

    /// `deleteObject` for this element
    pub fn delete(&self) -> SlidesRequest {
        SlidesRequest::delete_object(&self.object_id)
    }

    /// Replace the shape's text; empty `text` clears it
    pub fn set_text(&mut self, text: &str) -> GoogleResult<Vec<SlidesRequest>> {
        let object_id = self.object_id.clone();
        let kind = self.kind.name();
        let shape = self.as_shape_mut().ok_or_else(|| {
            GoogleError::invalid_argument(format!("{} is a {}, not a shape", object_id, kind))
        })?;

        Ok(edit_text(&object_id, None, &mut shape.text, text))
    }

    pub fn clear_text(&mut self) -> GoogleResult<Vec<SlidesRequest>> {
        self.set_text("")
    }

    /// Replace the text of one table cell; empty `text` clears it
    pub fn set_cell_text(
        &mut self,
        row: u32,
        column: u32,
        text: &str,
    ) -> GoogleResult<Vec<SlidesRequest>> {
        let object_id = self.object_id.clone();
        let kind = self.kind.name();
        let table = self.as_table_mut().ok_or_else(|| {
            GoogleError::invalid_argument(format!("{} is a {}, not a table", object_id, kind))
        })?;
        let cell = table.cell_mut(row, column).ok_or_else(|| {
            GoogleError::not_found("table cell", format!("{}[{}][{}]", object_id, row, column))
        })?;
        let location = cell.location();

        Ok(edit_text(&object_id, Some(location), cell.text_slot(), text))
    }

    pub fn clear_cell_text(&mut self, row: u32, column: u32) -> GoogleResult<Vec<SlidesRequest>> {
        self.set_cell_text(row, column, "")
    }
}
