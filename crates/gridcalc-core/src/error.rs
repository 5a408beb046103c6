//! Error types for Gridcalc core.

use std::path::PathBuf;

use gridcalc_engine::EvalError;
use thiserror::Error;

/// Errors that can occur loading, evaluating or exporting a spreadsheet
#[derive(Error, Debug)]
pub enum GridcalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("Refusing to read {}: file too large ({size} bytes, max {max})", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, GridcalcError>;
