//! Markdown export functionality

use crate::document::Spreadsheet;
use crate::error::Result;
use gridcalc_engine::engine::CellRef;
use std::fmt::Write as _;
use std::path::Path;

/// Write the evaluated grid to a markdown file
pub fn write_markdown(path: &Path, sheet: &Spreadsheet) -> Result<()> {
    let content = write_markdown_content(sheet)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Render the evaluated grid as a markdown document with a single table.
///
/// Columns are headed by their letters and rows by their 1-based number.
pub fn write_markdown_content(sheet: &Spreadsheet) -> Result<String> {
    let rows = sheet.displayed_rows()?;
    let mut out = String::from("# Sheet\n\n");

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if width == 0 {
        out.push_str("*Empty spreadsheet*\n");
        return Ok(out);
    }

    // Header with column letters
    out.push_str("|   |");
    for col in 0..width {
        let _ = write!(out, " {} |", CellRef::col_to_letters(col));
    }
    out.push('\n');

    out.push_str("|---|");
    for _ in 0..width {
        out.push_str("---|");
    }
    out.push('\n');

    for (idx, row) in rows.iter().enumerate() {
        let _ = write!(out, "| {} |", idx + 1);
        for col in 0..width {
            let display = row.get(col).map(String::as_str).unwrap_or("");
            let _ = write!(out, " {} |", escape_markdown(display));
        }
        out.push('\n');
    }

    Ok(out)
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}
