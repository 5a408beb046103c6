//! Parser for tab/space separated documents.
//!
//! Rows are lines; cells within a row are separated by a tab or by a run of two
//! or more spaces. A single space stays inside the cell text.

use crate::error::{GridcalcError, Result};
use gridcalc_engine::engine::Grid;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub const MAX_SHEET_FILE_BYTES: u64 = 16 * 1_048_576; // 16 MiB

fn cell_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\t| {2,}").expect("valid cell separator regex"))
}

/// Read and parse a document file.
pub fn parse_sheet(path: &Path) -> Result<Grid> {
    let meta = fs::metadata(path)?;
    if meta.len() > MAX_SHEET_FILE_BYTES {
        return Err(GridcalcError::FileTooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            max: MAX_SHEET_FILE_BYTES,
        });
    }
    let content = fs::read_to_string(path)?;
    Ok(parse_sheet_content(&content))
}

/// Parse document text into a grid. Blank lines are skipped.
pub fn parse_sheet_content(content: &str) -> Grid {
    let rows: Vec<Vec<String>> = content
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(split_row)
        .collect();

    if let Some(width) = rows.first().map(Vec::len) {
        for (idx, row) in rows.iter().enumerate().skip(1) {
            if row.len() < width {
                log::warn!(
                    "row {} has {} cells, first row has {}; missing cells read as empty",
                    idx + 1,
                    row.len(),
                    width
                );
            }
        }
    }

    Grid::from_rows(rows)
}

/// Split one trimmed line into cells.
pub fn split_row(line: &str) -> Vec<String> {
    cell_separator().split(line).map(str::to_string).collect()
}
