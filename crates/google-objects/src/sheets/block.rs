//! Block
//!
//! A `ValueRange` read from a spreadsheet. Rows can be edited in place and
//! written back with [`Block::update`].

use std::ops::{Index, IndexMut};

use serde_json::Value;
use tracing::debug;

use super::api::SheetsApi;
use super::model::{AppendValuesResponse, UpdateValuesResponse, ValueInputOption, ValueRange};
use crate::common::GoogleResult;

#[derive(Debug, Clone)]
pub struct Block {
    api: SheetsApi,
    spreadsheet_id: String,
    range: String,
    major_dimension: Option<String>,
    values: Vec<Vec<Value>>,
}

impl Block {
    pub fn from_value_range(api: SheetsApi, spreadsheet_id: &str, value_range: ValueRange) -> Self {
        Self {
            api,
            spreadsheet_id: spreadsheet_id.to_string(),
            range: value_range.range,
            major_dimension: value_range.major_dimension,
            values: value_range.values,
        }
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Range in A1 notation, as reported by the API
    pub fn range(&self) -> &str {
        &self.range
    }

    pub fn major_dimension(&self) -> Option<&str> {
        self.major_dimension.as_deref()
    }

    pub fn values(&self) -> &[Vec<Value>] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut Vec<Vec<Value>> {
        &mut self.values
    }

    pub fn rows(&self) -> std::slice::Iter<'_, Vec<Value>> {
        self.values.iter()
    }

    pub fn row(&self, index: usize) -> Option<&Vec<Value>> {
        self.values.get(index)
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Write the local values back to the block's range
    pub async fn update(&self) -> GoogleResult<UpdateValuesResponse> {
        debug!("Writing {} row(s) back to {}", self.values.len(), self.range);
        self.api
            .update_values(
                &self.spreadsheet_id,
                &self.range,
                &self.values,
                ValueInputOption::Raw,
            )
            .await
    }

    /// Append rows after the block's table
    pub async fn append(&self, rows: &[Vec<Value>]) -> GoogleResult<AppendValuesResponse> {
        self.api
            .append_values(&self.spreadsheet_id, &self.range, rows)
            .await
    }

    /// Run `f` against the block, then write it back
    pub async fn scoped<F, T>(&mut self, f: F) -> GoogleResult<T>
    where
        F: FnOnce(&mut Self) -> T,
    {
        let out = f(self);
        self.update().await?;
        Ok(out)
    }
}

impl Index<usize> for Block {
    type Output = Vec<Value>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl IndexMut<usize> for Block {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index]
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Vec<Value>;
    type IntoIter = std::slice::Iter<'a, Vec<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
