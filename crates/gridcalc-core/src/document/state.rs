use gridcalc_engine::engine::{CellRef, EvalOptions, Grid, display_cell, display_raw};
use gridcalc_engine::{EvalError, Result};

use crate::storage::parse_sheet_content;

/// A parsed document: an immutable grid of raw cell text plus the options
/// used whenever a formula cell is read.
///
/// Reads never cache; each one re-evaluates the formulas it touches.
#[derive(Clone, Debug, Default)]
pub struct Spreadsheet {
    grid: Grid,
    options: EvalOptions,
}

impl Spreadsheet {
    /// Parse a document with default evaluation options.
    pub fn new(text: &str) -> Self {
        Self::with_options(text, EvalOptions::default())
    }

    pub fn with_options(text: &str, options: EvalOptions) -> Self {
        Self::from_grid(parse_sheet_content(text), options)
    }

    pub fn from_grid(grid: Grid, options: EvalOptions) -> Self {
        Spreadsheet { grid, options }
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.grid.row_count()
    }

    /// Width of the first row.
    pub fn cols(&self) -> usize {
        self.grid.col_count()
    }

    /// Raw text of the cell at `address`, without evaluation.
    pub fn raw_cell(&self, address: &str) -> Result<&str> {
        let cell = CellRef::parse(address)?;
        self.grid.get(&cell)
    }

    /// Display value of the cell at `address` (e.g. `"B12"`).
    ///
    /// Non-formula cells come back verbatim; formulas are evaluated.
    pub fn read_cell(&self, address: &str) -> Result<String> {
        let cell = CellRef::parse(address)?;
        self.cell_display(&cell)
    }

    pub fn cell_display(&self, cell: &CellRef) -> Result<String> {
        display_cell(&self.grid, cell, &self.options)
    }

    /// Evaluate every cell, one row per line, cells separated by tabs.
    pub fn render(&self) -> Result<String> {
        let lines = self
            .displayed_rows()?
            .into_iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>();
        Ok(lines.join("\n"))
    }

    /// Display values of every cell, row by row. Ragged rows keep their own length.
    pub fn displayed_rows(&self) -> Result<Vec<Vec<String>>> {
        self.grid
            .rows()
            .enumerate()
            .map(|(r, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(c, raw)| display_raw(&self.grid, &CellRef::new(c, r), raw, &self.options))
                    .collect::<std::result::Result<Vec<_>, EvalError>>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SHEET: &str = "
        1\t2\t=ADD(A1, B1)
        total  of  =MULTIPLY(C1, 2)
    ";

    #[test]
    fn test_read_cell() {
        let sheet = Spreadsheet::new(SHEET);
        assert_eq!(sheet.read_cell("A1").unwrap(), "1");
        assert_eq!(sheet.read_cell("C1").unwrap(), "3");
        assert_eq!(sheet.read_cell("C2").unwrap(), "6");
        assert_eq!(sheet.read_cell("A2").unwrap(), "total");
    }

    #[test]
    fn test_raw_cell() {
        let sheet = Spreadsheet::new(SHEET);
        assert_eq!(sheet.raw_cell("C1").unwrap(), "=ADD(A1, B1)");
        assert_eq!(
            sheet.raw_cell("1A"),
            Err(EvalError::InvalidAddress("1A".to_string()))
        );
    }

    #[test]
    fn test_shape() {
        let sheet = Spreadsheet::new(SHEET);
        assert!(!sheet.is_empty());
        assert_eq!(sheet.rows(), 2);
        assert_eq!(sheet.cols(), 3);
    }

    #[test]
    fn test_render() {
        let sheet = Spreadsheet::new(SHEET);
        assert_eq!(sheet.render().unwrap(), "1\t2\t3\ntotal\tof\t6");
    }

    #[test]
    fn test_render_ragged_rows() {
        let sheet = Spreadsheet::new("a\tb\n=ADD(1,2)\nx\ty\t=MOD(9, 4)");
        assert_eq!(sheet.render().unwrap(), "a\tb\n3\nx\ty\t1");
    }

    #[test]
    fn test_render_fails_fast() {
        let sheet = Spreadsheet::new("1\t=FOO(1,2)");
        assert_eq!(
            sheet.render(),
            Err(EvalError::UnknownFunction("FOO".to_string()))
        );
    }

    #[test]
    fn test_options_bound_recursion() {
        let sheet = Spreadsheet::with_options(
            "=A2\n=A3\n=A4\n1",
            EvalOptions { max_depth: 2 },
        );
        assert!(matches!(
            sheet.read_cell("A1"),
            Err(EvalError::RecursionLimit { limit: 2, .. })
        ));
        assert_eq!(sheet.read_cell("A2").unwrap(), "1");
    }

    #[test]
    fn test_empty_document() {
        let sheet = Spreadsheet::new("  \n\n ");
        assert!(sheet.is_empty());
        assert_eq!(sheet.render().unwrap(), "");
    }
}
