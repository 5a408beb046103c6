//! Spreadsheet engine API.
//!
//! This module provides the core computation engine for the spreadsheet:
//!
//! - [`Grid`], [`CellContent`] - Raw cell storage and formula detection
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`parse_expression`] - Tokenize and parse a formula body
//! - [`display_cell`] - Evaluate a cell to its display string
//! - [`format_number`] - Canonical number formatting

mod cell;
mod cell_ref;
mod cycle;
mod eval;
mod format;
mod parser;

pub use cell::{CellContent, Grid};
pub use cell_ref::CellRef;
pub use eval::{CellSource, DEFAULT_MAX_DEPTH, EvalOptions, display_cell, display_raw};
pub use format::{format_number, leading_number};
pub use parser::{Argument, Expr, parse_expression};
