//! gridcalc-core - document model, parsing and export.

pub mod document;
pub mod error;
pub mod storage;

pub use document::Spreadsheet;
pub use error::{GridcalcError, Result};

pub use gridcalc_engine::EvalError;
pub use gridcalc_engine::engine::{CellRef, EvalOptions};
