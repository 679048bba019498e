//! Argument expressions consumed by the function binder.

use std::fmt;

use crate::context::Evaluated;
use crate::datum::{Datum, DatumKind};
use crate::error::{MathError, MathResult};
use crate::functions::BoundFunction;

/// One input row, addressed by column position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<Datum>,
}

impl Row {
    pub fn new(values: Vec<Datum>) -> Self {
        Self { values }
    }

    pub fn get(&self, index: usize) -> Option<&Datum> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Datum>> for Row {
    fn from(values: Vec<Datum>) -> Self {
        Self::new(values)
    }
}

/// A literal with its declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub value: Datum,
    pub ret_type: DatumKind,
}

/// A reference to a column of the row being evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub index: usize,
    pub name: String,
    pub ret_type: DatumKind,
}

#[derive(Debug, Clone)]
pub enum Expression {
    Constant(Constant),
    Column(ColumnRef),
    ScalarFunction(Box<BoundFunction>),
}

impl Expression {
    /// Literal whose declared type is the value's own kind.
    pub fn constant(value: impl Into<Datum>) -> Self {
        let value = value.into();
        let ret_type = value.kind();
        Expression::Constant(Constant { value, ret_type })
    }

    pub fn typed_constant(value: impl Into<Datum>, ret_type: DatumKind) -> Self {
        Expression::Constant(Constant {
            value: value.into(),
            ret_type,
        })
    }

    pub fn column(index: usize, name: impl Into<String>, ret_type: DatumKind) -> Self {
        Expression::Column(ColumnRef {
            index,
            name: name.into(),
            ret_type,
        })
    }

    pub fn function(bound: BoundFunction) -> Self {
        Expression::ScalarFunction(Box::new(bound))
    }

    pub fn ret_type(&self) -> DatumKind {
        match self {
            Expression::Constant(c) => c.ret_type,
            Expression::Column(c) => c.ret_type,
            Expression::ScalarFunction(f) => f.ret_type(),
        }
    }

    /// True when evaluation needs no row and always yields the same value.
    pub fn is_constant(&self) -> bool {
        match self {
            Expression::Constant(_) => true,
            Expression::Column(_) => false,
            Expression::ScalarFunction(f) => {
                f.is_deterministic() && f.args().iter().all(Expression::is_constant)
            }
        }
    }

    pub fn eval(&mut self, row: Option<&Row>) -> MathResult<Evaluated> {
        match self {
            Expression::Constant(c) => Ok(Evaluated::new(c.value.clone())),
            Expression::Column(c) => {
                let row = row.ok_or_else(|| {
                    MathError::EvalError(format!("column '{}' evaluated without a row", c.name))
                })?;
                let value = row.get(c.index).ok_or_else(|| {
                    MathError::EvalError(format!(
                        "column '{}' (index {}) is out of range for a row of {} values",
                        c.name,
                        c.index,
                        row.len()
                    ))
                })?;
                Ok(Evaluated::new(value.clone()))
            }
            Expression::ScalarFunction(f) => f.eval(row),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(c) => match &c.value {
                Datum::String(s) => write!(f, "'{}'", s),
                other => write!(f, "{}", other),
            },
            Expression::Column(c) => f.write_str(&c.name),
            Expression::ScalarFunction(func) => write!(f, "{}", func),
        }
    }
}
