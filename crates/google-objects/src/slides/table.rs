//! Tables and table cells

use regex::Regex;

use super::element::matches;
use super::model::{TableCellLocation, TableCellResource, TableResource};

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    location: TableCellLocation,
    row_span: u32,
    column_span: u32,
    text: Option<String>,
}

impl TableCell {
    fn from_resource(resource: TableCellResource, row: u32, column: u32) -> Self {
        Self {
            location: resource.location.unwrap_or(TableCellLocation {
                row_index: row,
                column_index: column,
            }),
            row_span: resource.row_span.unwrap_or(1),
            column_span: resource.column_span.unwrap_or(1),
            text: resource
                .text
                .map(|t| t.raw_text())
                .filter(|t| !t.is_empty()),
        }
    }

    pub fn location(&self) -> TableCellLocation {
        self.location
    }

    pub fn row(&self) -> u32 {
        self.location.row_index
    }

    pub fn column(&self) -> u32 {
        self.location.column_index
    }

    pub fn row_span(&self) -> u32 {
        self.row_span
    }

    pub fn column_span(&self) -> u32 {
        self.column_span
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub(crate) fn text_slot(&mut self) -> &mut Option<String> {
        &mut self.text
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: u32,
    columns: u32,
    cells: Vec<Vec<TableCell>>,
}

impl Table {
    pub(crate) fn from_resource(resource: TableResource) -> Self {
        let cells: Vec<Vec<TableCell>> = resource
            .table_rows
            .into_iter()
            .enumerate()
            .map(|(r, row)| {
                row.table_cells
                    .into_iter()
                    .enumerate()
                    .map(|(c, cell)| TableCell::from_resource(cell, r as u32, c as u32))
                    .collect()
            })
            .collect();

        Self {
            rows: resource.rows,
            columns: resource.columns,
            cells,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<TableCell>> {
        self.cells.iter()
    }

    /// Cell whose location is `(row, column)`
    pub fn cell(&self, row: u32, column: u32) -> Option<&TableCell> {
        self.cells
            .iter()
            .flatten()
            .find(|c| c.row() == row && c.column() == column)
    }

    pub(crate) fn cell_mut(&mut self, row: u32, column: u32) -> Option<&mut TableCell> {
        self.cells
            .iter_mut()
            .flatten()
            .find(|c| c.row() == row && c.column() == column)
    }

    /// Every match of `re` across all cells, row by row
    pub fn seek(&self, re: &Regex) -> Vec<String> {
        self.cells
            .iter()
            .flatten()
            .flat_map(|cell| matches(re, cell.text()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Vec<TableCell>;
    type IntoIter = std::slice::Iter<'a, Vec<TableCell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
