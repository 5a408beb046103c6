//! Writer for rendered tab-separated output

use crate::document::Spreadsheet;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Evaluate the sheet and write it as tab-separated text with a trailing newline.
pub fn write_tsv(path: &Path, sheet: &Spreadsheet) -> Result<()> {
    let mut content = sheet.render()?;
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}
