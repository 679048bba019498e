//! Common test utilities for math builtin tests
//!
//! Provides shared helper functions for:
//! - Binding functions over constant arguments
//! - Evaluating them without a row
//! - Building decimal and temporal datums

#![allow(dead_code)]

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlmath::{lookup, BoundFunction, Datum, EvalContext, Evaluated, Expression, MathResult};

pub fn bind_with(name: &str, args: Vec<Datum>, ctx: &EvalContext) -> MathResult<BoundFunction> {
    let class = lookup(name).unwrap_or_else(|| panic!("{} is not registered", name));
    let args = args.into_iter().map(Expression::constant).collect();
    class.get_function(args, ctx)
}

pub fn bind(name: &str, args: Vec<Datum>) -> MathResult<BoundFunction> {
    bind_with(name, args, &EvalContext::new())
}

pub fn eval_with(name: &str, args: Vec<Datum>, ctx: &EvalContext) -> MathResult<Evaluated> {
    bind_with(name, args, ctx)?.eval(None)
}

pub fn eval(name: &str, args: Vec<Datum>) -> MathResult<Evaluated> {
    eval_with(name, args, &EvalContext::new())
}

/// Evaluate and require a clean result: no error and no warning.
pub fn value(name: &str, args: Vec<Datum>) -> Datum {
    let evaluated = eval(name, args.clone())
        .unwrap_or_else(|e| panic!("{}({:?}) failed: {}", name, args, e));
    assert!(
        evaluated.warning.is_none(),
        "{}({:?}) warned: {:?}",
        name,
        args,
        evaluated.warning
    );
    evaluated.datum
}

pub fn dec(s: &str) -> Datum {
    Datum::Decimal(Decimal::from_str(s).expect("valid decimal literal"))
}
