//! A1 notation
//!
//! Converts zero-based grid coordinates to A1 references such as
//! `'Sheet 1'!B2:D10`.

use crate::common::{GoogleError, GoogleResult};

use super::model::{GridProperties, GridRange};

/// Column letters for a zero-based index: 0 → `A`, 25 → `Z`, 26 → `AA`
pub fn column_letters(index: u32) -> String {
    let mut n = u64::from(index) + 1;
    let mut letters = Vec::new();

    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }

    letters.iter().rev().collect()
}

/// Zero-based index for column letters; case-insensitive
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }

    let mut acc: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        acc = acc.checked_mul(26)?.checked_add(digit)?;
    }

    Some(acc - 1)
}

/// Quote a sheet title for use in a range (`'It''s'`)
pub fn quote_sheet_name(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

/// A1 range for a fully bounded rectangle.
///
/// `start` is `(row, column)`, inclusive; `end` is `(row, column)`, exclusive.
pub fn grid_to_a1(sheet_name: &str, start: (u32, u32), end: (u32, u32)) -> GoogleResult<String> {
    let (start_row, start_col) = start;
    let (end_row, end_col) = end;

    if end_row <= start_row || end_col <= start_col {
        return Err(GoogleError::invalid_argument(format!(
            "Empty grid range: rows {}..{}, columns {}..{}",
            start_row, end_row, start_col, end_col
        )));
    }

    Ok(format!(
        "{}!{}{}:{}{}",
        quote_sheet_name(sheet_name),
        column_letters(start_col),
        start_row + 1,
        column_letters(end_col - 1),
        end_row
    ))
}

/// Resolve one dimension to `(start, end)`.
///
/// `None` means the dimension carries no bounds at all.
fn span(
    start: Option<u32>,
    end: Option<u32>,
    limit: Option<u32>,
    label: &str,
) -> GoogleResult<Option<(u32, u32)>> {
    let (start, end) = match (start, end) {
        (None, None) => return Ok(None),
        (start, Some(end)) => (start.unwrap_or(0), end),
        (Some(start), None) => {
            let end = limit.ok_or_else(|| {
                GoogleError::invalid_argument(format!(
                    "Open-ended {} range needs the sheet's grid size",
                    label
                ))
            })?;
            (start, end)
        }
    };

    if end <= start {
        return Err(GoogleError::invalid_argument(format!(
            "Empty {} range: {}..{}",
            label, start, end
        )));
    }

    Ok(Some((start, end)))
}

impl GridRange {
    /// A1 reference on `sheet_name`.
    ///
    /// A range without bounds is the whole sheet. Bounds on a single
    /// dimension produce whole-column (`A:C`) or whole-row (`1:3`) forms.
    /// Open ends are filled from `grid`.
    pub fn to_a1(&self, sheet_name: &str, grid: Option<&GridProperties>) -> GoogleResult<String> {
        let rows = span(
            self.start_row_index,
            self.end_row_index,
            grid.and_then(|g| g.row_count),
            "row",
        )?;
        let columns = span(
            self.start_column_index,
            self.end_column_index,
            grid.and_then(|g| g.column_count),
            "column",
        )?;

        let sheet = quote_sheet_name(sheet_name);
        match (rows, columns) {
            (None, None) => Ok(sheet),
            (Some((sr, er)), Some((sc, ec))) => grid_to_a1(sheet_name, (sr, sc), (er, ec)),
            (None, Some((sc, ec))) => Ok(format!(
                "{}!{}:{}",
                sheet,
                column_letters(sc),
                column_letters(ec - 1)
            )),
            (Some((sr, er)), None) => Ok(format!("{}!{}:{}", sheet, sr + 1, er)),
        }
    }
}
