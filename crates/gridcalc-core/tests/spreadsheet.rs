//! End-to-end reads through the public `Spreadsheet` API.

use gridcalc_core::{CellRef, EvalError, EvalOptions, GridcalcError, Spreadsheet};
use pretty_assertions::assert_eq;

const BUDGET: &str = "
Item           Price    Qty   Total
Coffee beans   12.5     2     =MULTIPLY(B2, C2)
Filters        3        4     =MULTIPLY(B3, C3)
Grand total    -        -     =ADD(D2, D3)
Share          =DIVIDE(D4, 3)  =MOD(D4, 7)  =SUBTRACT(D4, B5)
";

#[test]
fn non_formula_cells_are_verbatim() {
    let sheet = Spreadsheet::new(BUDGET);
    assert_eq!(sheet.read_cell("A2").unwrap(), "Coffee beans");
    assert_eq!(sheet.read_cell("B2").unwrap(), "12.5");
    assert_eq!(sheet.read_cell("A4").unwrap(), "Grand total");
}

#[test]
fn formulas_resolve_through_other_formulas() {
    let sheet = Spreadsheet::new(BUDGET);
    assert_eq!(sheet.read_cell("D2").unwrap(), "25");
    assert_eq!(sheet.read_cell("D3").unwrap(), "12");
    assert_eq!(sheet.read_cell("D4").unwrap(), "37");
    assert_eq!(sheet.read_cell("B5").unwrap(), "12.33");
    assert_eq!(sheet.read_cell("C5").unwrap(), "2");
    assert_eq!(sheet.read_cell("D5").unwrap(), "24.67");
}

#[test]
fn render_evaluates_every_cell() {
    let sheet = Spreadsheet::new(BUDGET);
    assert_eq!(
        sheet.render().unwrap(),
        "Item\tPrice\tQty\tTotal\n\
         Coffee beans\t12.5\t2\t25\n\
         Filters\t3\t4\t12\n\
         Grand total\t-\t-\t37\n\
         Share\t12.33\t2\t24.67"
    );
}

#[test]
fn reference_to_literal_and_nested_formula() {
    let sheet = Spreadsheet::new("3\t=ADD(A1, 5)\n=ADD(B2, 3)\t=ADD(1,1)");
    assert_eq!(sheet.read_cell("B1").unwrap(), "8");
    assert_eq!(sheet.read_cell("A2").unwrap(), "5");
}

#[test]
fn address_errors() {
    let sheet = Spreadsheet::new("1\t2\t3\n4\t5\t6\n7\t8\t9");
    assert_eq!(
        sheet.read_cell("Z9999"),
        Err(EvalError::CellOutOfRange(CellRef::parse("Z9999").unwrap()))
    );
    assert_eq!(
        sheet.read_cell("Z9999").unwrap_err().to_string(),
        "Cell 'Z9999' does not exist"
    );
    assert_eq!(
        sheet.read_cell("1A"),
        Err(EvalError::InvalidAddress("1A".to_string()))
    );
    assert_eq!(
        sheet.read_cell("1A").unwrap_err().to_string(),
        "Invalid cell index '1A'"
    );
    assert!(sheet.read_cell("D1").is_err());
    assert!(sheet.read_cell("A4").is_err());
    assert_eq!(sheet.read_cell("C3").unwrap(), "9");
}

#[test]
fn function_errors() {
    let sheet = Spreadsheet::new("=ADD(1)\t=FOO(1,2)\t=ADD(1,\t=ADD(A1, 1)");
    assert!(matches!(
        sheet.read_cell("A1"),
        Err(EvalError::WrongArity { actual: 1, .. })
    ));
    assert_eq!(
        sheet.read_cell("B1"),
        Err(EvalError::UnknownFunction("FOO".to_string()))
    );
    // The tab splits "=ADD(1," into its own cell.
    assert!(matches!(
        sheet.read_cell("C1"),
        Err(EvalError::InvalidExpression { .. })
    ));
    // Errors surface unchanged through references.
    assert_eq!(sheet.read_cell("D1"), sheet.read_cell("A1"));
}

#[test]
fn circular_references_are_reported() {
    let sheet = Spreadsheet::new("=ADD(B1, 1)\t=ADD(A1, 1)");
    assert_eq!(
        sheet.read_cell("A1").unwrap_err().to_string(),
        "Circular reference: A1 -> B1 -> A1"
    );
    assert!(matches!(
        sheet.render(),
        Err(EvalError::CircularReference { .. })
    ));
}

#[test]
fn options_are_carried_into_reads() {
    let sheet = Spreadsheet::with_options("=B1\t=C1\t7", EvalOptions { max_depth: 1 });
    assert!(matches!(
        sheet.read_cell("A1"),
        Err(EvalError::RecursionLimit { limit: 1, .. })
    ));
    assert_eq!(sheet.read_cell("B1").unwrap(), "7");
}

#[test]
fn load_and_export_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.txt");
    std::fs::write(&input, "2\t=MULTIPLY(A1, 3)\n").unwrap();

    let sheet = Spreadsheet::load(&input).unwrap();
    assert_eq!(sheet.read_cell("B1").unwrap(), "6");

    let tsv = dir.path().join("out.tsv");
    sheet.save_rendered(&tsv).unwrap();
    assert_eq!(std::fs::read_to_string(&tsv).unwrap(), "2\t6\n");

    let md = dir.path().join("out.md");
    sheet.export_markdown(&md).unwrap();
    assert!(std::fs::read_to_string(&md).unwrap().contains("| 1 | 2 | 6 |"));
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Spreadsheet::load(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, GridcalcError::Io(_)));
}
