//! Error types for formula evaluation.

use thiserror::Error;

use crate::builtins::Arity;
use crate::engine::CellRef;

/// Errors raised while resolving addresses or evaluating formulas.
///
/// Every variant aborts the enclosing cell read; errors from referenced cells
/// surface unchanged to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Invalid cell index '{0}'")]
    InvalidAddress(String),

    #[error("Cell '{0}' does not exist")]
    CellOutOfRange(CellRef),

    #[error("Invalid expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: String },

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    #[error("Wrong number of arguments for '{function}': expected {expected}, got {actual}")]
    WrongArity {
        function: String,
        expected: Arity,
        actual: usize,
    },

    #[error("Circular reference: {}", join_path(.path))]
    CircularReference { path: Vec<CellRef> },

    #[error("Exceeded {limit} nested cell references at '{cell}'")]
    RecursionLimit { limit: usize, cell: CellRef },
}

fn join_path(path: &[CellRef]) -> String {
    path.iter()
        .map(CellRef::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub type Result<T> = std::result::Result<T, EvalError>;
