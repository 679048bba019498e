//! Call-syntax front end used by the `sqlmath-repl` binary.
//!
//! Input is a single expression:
//! - `NAME(arg, ...)` calls, nested freely
//! - `NULL`, integers, decimals (`1.5`), floats (`1.5e0`), quoted strings
//!
//! Every call is bound through the registry as it is parsed, so arity and
//! argument-kind errors surface before evaluation.

pub mod lexer;
pub mod parser;

use serde::Serialize;

use crate::context::EvalContext;
use crate::datum::{Datum, DatumKind};
use crate::error::{MathError, MathResult};
use crate::expression::Expression;

pub use parser::CallParser;

pub fn parse(input: &str, ctx: &EvalContext) -> MathResult<Expression> {
    CallParser::new(input, ctx)?.parse()
}

/// Result of evaluating one line, shaped for printing or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub expression: String,
    pub kind: String,
    pub result: Datum,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<MathError>,
}

/// Parse, bind and evaluate `input` without a row.
pub fn evaluate(input: &str, ctx: &EvalContext) -> MathResult<Outcome> {
    let mut expr = parse(input, ctx)?;
    let expression = expr.to_string();
    let evaluated = expr.eval(None)?;
    let kind = match &evaluated.datum {
        Datum::Null => DatumKind::Null,
        _ => expr.ret_type(),
    };
    tracing::debug!("Evaluated {} -> {}", expression, evaluated.datum);

    Ok(Outcome {
        expression,
        kind: kind.to_string(),
        result: evaluated.datum,
        warning: evaluated.warning,
    })
}
