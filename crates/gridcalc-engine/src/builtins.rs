//! Built-in spreadsheet functions and their metadata.
//!
//! Conventions:
//! - Spreadsheet-facing built-in names are ALL CAPS (e.g. `ADD`, `MOD`) and are
//!   matched case-insensitively.
//! - Arguments are plain numbers; arity is checked before the operation runs.
//! - If you add a new built-in, add a [`Builtin`] variant, its arm in
//!   [`Builtin::apply`] and an entry in [`BUILTINS`].

use std::fmt;

use log::debug;

use crate::error::{EvalError, Result};

/// Number of arguments a builtin accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    AtLeast(usize),
    Exactly(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::AtLeast(min) => count >= min,
            Arity::Exactly(n) => count == n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::AtLeast(min) => write!(f, "at least {min}"),
            Arity::Exactly(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Multiply,
    Subtract,
    Divide,
    Mod,
}

impl Builtin {
    /// Run the operation. Callers must have checked arity.
    fn apply(self, args: &[f64]) -> f64 {
        match self {
            Builtin::Add => args.iter().sum(),
            Builtin::Multiply => args.iter().product(),
            Builtin::Subtract => args[0] - args[1],
            // Division by zero yields inf/NaN like any float division.
            Builtin::Divide => args[0] / args[1],
            Builtin::Mod => floored_mod(args[0], args[1]),
        }
    }
}

/// Remainder taking the sign of the divisor (`MOD(-7, 3) == 2`).
fn floored_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

#[derive(Debug)]
pub struct BuiltinSpec {
    pub name: &'static str,
    pub builtin: Builtin,
    pub arity: Arity,
    pub description: &'static str,
}

impl BuiltinSpec {
    /// Check arity and apply the operation.
    pub fn call(&self, args: &[f64]) -> Result<f64> {
        if !self.arity.accepts(args.len()) {
            return Err(EvalError::WrongArity {
                function: self.name.to_string(),
                expected: self.arity,
                actual: args.len(),
            });
        }
        Ok(self.builtin.apply(args))
    }
}

pub const BUILTINS: &[BuiltinSpec] = &[
    BuiltinSpec {
        name: "ADD",
        builtin: Builtin::Add,
        arity: Arity::AtLeast(2),
        description: "Sum of all arguments",
    },
    BuiltinSpec {
        name: "MULTIPLY",
        builtin: Builtin::Multiply,
        arity: Arity::AtLeast(2),
        description: "Product of all arguments",
    },
    BuiltinSpec {
        name: "SUBTRACT",
        builtin: Builtin::Subtract,
        arity: Arity::Exactly(2),
        description: "First argument minus the second",
    },
    BuiltinSpec {
        name: "DIVIDE",
        builtin: Builtin::Divide,
        arity: Arity::Exactly(2),
        description: "First argument divided by the second",
    },
    BuiltinSpec {
        name: "MOD",
        builtin: Builtin::Mod,
        arity: Arity::Exactly(2),
        description: "Remainder of the first argument divided by the second",
    },
];

/// Find a builtin by name, ignoring case.
pub fn lookup(name: &str) -> Result<&'static BuiltinSpec> {
    BUILTINS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))
}

/// Look up `name` and call it with `args`.
pub fn invoke(name: &str, args: &[f64]) -> Result<f64> {
    let spec = lookup(name)?;
    debug!("calling {} with {:?}", spec.name, args);
    spec.call(args)
}
