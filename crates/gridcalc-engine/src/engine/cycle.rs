//! Circular reference detection during evaluation.
//!
//! Evaluation recurses through cell references (A1 reads B1, B1 reads C1, ...).
//! The stack of formula cells currently being evaluated is tracked so that a
//! cell re-entering its own evaluation is reported as a cycle instead of
//! recursing until the call stack is exhausted.

use std::collections::HashSet;

use super::CellRef;
use crate::error::{EvalError, Result};

#[derive(Debug, Default)]
pub(crate) struct EvalStack {
    visiting: HashSet<CellRef>,
    path: Vec<CellRef>,
}

impl EvalStack {
    /// Push `cell` onto the evaluation path.
    ///
    /// Fails with the offending path if `cell` is already being evaluated, or
    /// if the path is already `max_depth` cells deep.
    pub(crate) fn enter(&mut self, cell: &CellRef, max_depth: usize) -> Result<()> {
        if self.visiting.contains(cell) {
            let start = self.path.iter().position(|c| c == cell).unwrap_or(0);
            let mut path = self.path[start..].to_vec();
            path.push(*cell);
            return Err(EvalError::CircularReference { path });
        }
        if self.path.len() >= max_depth {
            return Err(EvalError::RecursionLimit {
                limit: max_depth,
                cell: *cell,
            });
        }
        self.visiting.insert(*cell);
        self.path.push(*cell);
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        if let Some(cell) = self.path.pop() {
            self.visiting.remove(&cell);
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.path.len()
    }
}
