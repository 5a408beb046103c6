//! Formula evaluation.
//!
//! Evaluation is a pure function of the formula text and a read-only
//! [`CellSource`]. A cell-reference argument reads the leading number of a
//! literal cell, or the displayed (two-decimal) value of a formula cell, which
//! is evaluated recursively. Non-finite formula results pass through as is.
//! Nothing is cached between reads.

use log::{debug, trace};

use super::cycle::EvalStack;
use super::{Argument, CellContent, CellRef, Expr, Grid, format_number, leading_number, parse_expression};
use crate::builtins;
use crate::error::Result;

/// Default bound on nested formula-cell evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Evaluation settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalOptions {
    /// Maximum number of formula cells on the evaluation path at once.
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Read-only view of raw cell text that formulas may reference.
pub trait CellSource {
    fn raw_cell(&self, cell: &CellRef) -> Result<&str>;
}

impl CellSource for Grid {
    fn raw_cell(&self, cell: &CellRef) -> Result<&str> {
        self.get(cell)
    }
}

/// Display string of `cell`: literal text verbatim, formulas evaluated.
pub fn display_cell<S: CellSource + ?Sized>(
    source: &S,
    cell: &CellRef,
    options: &EvalOptions,
) -> Result<String> {
    Evaluator::new(source, options).display(cell)
}

/// Display string for `raw` text known to live at `cell`.
///
/// Used when the caller already holds the raw text, e.g. while rendering
/// every row of a grid.
pub fn display_raw<S: CellSource + ?Sized>(
    source: &S,
    cell: &CellRef,
    raw: &str,
    options: &EvalOptions,
) -> Result<String> {
    Evaluator::new(source, options).display_text(cell, raw)
}

struct Evaluator<'a, S: ?Sized> {
    source: &'a S,
    options: &'a EvalOptions,
    stack: EvalStack,
}

impl<'a, S: CellSource + ?Sized> Evaluator<'a, S> {
    fn new(source: &'a S, options: &'a EvalOptions) -> Self {
        Self {
            source,
            options,
            stack: EvalStack::default(),
        }
    }

    fn display(&mut self, cell: &CellRef) -> Result<String> {
        let source: &'a S = self.source;
        let raw = source.raw_cell(cell)?;
        self.display_text(cell, raw)
    }

    fn display_text(&mut self, cell: &CellRef, raw: &str) -> Result<String> {
        match CellContent::classify(raw) {
            CellContent::Literal(text) => Ok(text.to_string()),
            CellContent::Formula(body) => self.formula(cell, body).map(format_number),
        }
    }

    fn formula(&mut self, cell: &CellRef, body: &str) -> Result<f64> {
        self.stack.enter(cell, self.options.max_depth)?;
        let result = self.evaluate(body);
        self.stack.leave();
        result
    }

    fn evaluate(&mut self, body: &str) -> Result<f64> {
        debug!("evaluating '{}' (depth {})", body, self.stack.depth());
        match parse_expression(body)? {
            Expr::Argument(arg) => self.argument(&arg),
            Expr::Call { name, args } => {
                let values = args
                    .iter()
                    .map(|arg| self.argument(arg))
                    .collect::<Result<Vec<f64>>>()?;
                builtins::invoke(&name, &values)
            }
        }
    }

    fn argument(&mut self, arg: &Argument) -> Result<f64> {
        match arg {
            Argument::Number(n) => Ok(*n),
            Argument::Cell(text) => {
                let cell = CellRef::parse(text)?;
                let value = self.cell_value(&cell)?;
                trace!("{} reads as {}", cell, value);
                Ok(value)
            }
        }
    }

    fn cell_value(&mut self, cell: &CellRef) -> Result<f64> {
        let source: &'a S = self.source;
        match CellContent::classify(source.raw_cell(cell)?) {
            CellContent::Literal(text) => Ok(leading_number(text)),
            CellContent::Formula(body) => {
                let value = self.formula(cell, body)?;
                if value.is_finite() {
                    Ok(leading_number(&format_number(value)))
                } else {
                    Ok(value)
                }
            }
        }
    }
}
