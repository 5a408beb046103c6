//! Spreadsheet facade over the grid and the formula engine.

mod io;
mod state;

pub use state::Spreadsheet;
