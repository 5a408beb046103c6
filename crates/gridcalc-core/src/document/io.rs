use super::Spreadsheet;
use crate::error::Result;
use crate::storage::{parse_sheet, write_markdown, write_tsv};
use gridcalc_engine::engine::EvalOptions;
use std::path::Path;

impl Spreadsheet {
    /// Load a document from disk with default evaluation options.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_options(path, EvalOptions::default())
    }

    pub fn load_with_options(path: &Path, options: EvalOptions) -> Result<Self> {
        let grid = parse_sheet(path)?;
        log::info!(
            "loaded {} ({} rows x {} cols)",
            path.display(),
            grid.row_count(),
            grid.col_count()
        );
        Ok(Self::from_grid(grid, options))
    }

    /// Write the evaluated grid as tab-separated text.
    pub fn save_rendered(&self, path: &Path) -> Result<()> {
        write_tsv(path, self)
    }

    /// Write the evaluated grid as a Markdown table.
    pub fn export_markdown(&self, path: &Path) -> Result<()> {
        write_markdown(path, self)
    }
}
