//! gridcalc_engine - Spreadsheet engine: cell addressing, formula parsing, builtins.

pub mod builtins;
pub mod engine;
mod error;

pub use error::{EvalError, Result};

#[cfg(test)]
mod tests {
    use crate::engine::*;
    use crate::EvalError;

    #[test]
    fn test_parse_single_letter_columns() {
        let a1 = CellRef::parse("A1").unwrap();
        assert_eq!(a1.row, 0);
        assert_eq!(a1.col, 0);

        let b1 = CellRef::parse("B1").unwrap();
        assert_eq!(b1.row, 0);
        assert_eq!(b1.col, 1);

        let z1 = CellRef::parse("Z1").unwrap();
        assert_eq!(z1.row, 0);
        assert_eq!(z1.col, 25);
    }

    #[test]
    fn test_parse_multi_letter_columns() {
        assert_eq!(CellRef::parse("AA1").unwrap().col, 26);
        assert_eq!(CellRef::parse("AB1").unwrap().col, 27);
        assert_eq!(CellRef::parse("AZ1").unwrap().col, 51);
        assert_eq!(CellRef::parse("BA1").unwrap().col, 52);
        assert_eq!(CellRef::parse("ZZ1").unwrap().col, 701);
        assert_eq!(CellRef::parse("AAA1").unwrap().col, 702);
    }

    #[test]
    fn test_parse_row_numbers() {
        assert_eq!(CellRef::parse("A1").unwrap().row, 0);
        assert_eq!(CellRef::parse("A10").unwrap().row, 9);
        assert_eq!(CellRef::parse("B12").unwrap().row, 11);
        assert_eq!(CellRef::parse("A100").unwrap().row, 99);
    }

    #[test]
    fn test_parse_invalid_inputs() {
        for input in ["", "123", "ABC", "A0", "1A", "A 1", "a1", "aA1", "A1 ", "$A$1", "A-1"] {
            assert_eq!(
                CellRef::parse(input),
                Err(EvalError::InvalidAddress(input.to_string())),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for name in ["A1", "Z9", "AA27", "AZ3", "ZZ100", "AAA1"] {
            assert_eq!(CellRef::parse(name).unwrap().to_string(), name);
        }
    }

    #[test]
    fn test_spreadsheet_flow_over_grid() {
        let grid = Grid::from_rows(vec![
            vec!["3".to_string(), "=ADD(A1, 5)".to_string()],
            vec!["=ADD(1,1)".to_string(), "=ADD(A2, 3)".to_string()],
        ]);
        let options = EvalOptions::default();
        let cell = |name: &str| display_cell(&grid, &CellRef::parse(name).unwrap(), &options);

        assert_eq!(cell("A1").unwrap(), "3");
        assert_eq!(cell("B1").unwrap(), "8");
        assert_eq!(cell("A2").unwrap(), "2");
        assert_eq!(cell("B2").unwrap(), "5");
    }
}
