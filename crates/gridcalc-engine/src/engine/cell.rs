//! Raw cell storage.

use crate::error::{EvalError, Result};

use super::CellRef;

/// How a cell's raw text is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellContent<'a> {
    /// Displayed verbatim.
    Literal(&'a str),
    /// Text after the leading `=`, with leading whitespace trimmed.
    Formula(&'a str),
}

impl<'a> CellContent<'a> {
    pub fn classify(raw: &'a str) -> CellContent<'a> {
        match raw.strip_prefix('=') {
            Some(body) => CellContent::Formula(body.trim_start()),
            None => CellContent::Literal(raw),
        }
    }
}

/// Immutable grid of raw cell text, row-major.
///
/// The first row defines the width used for bounds checks. Rows shorter than
/// that read their missing trailing cells as empty text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Grid {
        Grid { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of row 0.
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Raw text of a cell, bounds-checked against the row count and row 0's width.
    pub fn get(&self, cell: &CellRef) -> Result<&str> {
        if cell.row >= self.row_count() || cell.col >= self.col_count() {
            return Err(EvalError::CellOutOfRange(*cell));
        }
        Ok(self.rows[cell.row]
            .get(cell.col)
            .map(String::as_str)
            .unwrap_or(""))
    }
}
