//! Trigonometric builtins. Arguments are radians.

use super::Call;
use crate::context::Evaluated;
use crate::error::MathResult;

fn unary(call: &Call, op: fn(f64) -> f64) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    Ok(Evaluated::new(op(call.real(0)?)))
}

/// Inverse functions are only defined on [-1, 1].
fn inverse(call: &Call, op: fn(f64) -> f64) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    let x = call.real(0)?;
    if !(-1.0..=1.0).contains(&x) {
        return Ok(Evaluated::null());
    }
    Ok(Evaluated::new(op(x)))
}

pub fn sin(call: &Call) -> MathResult<Evaluated> {
    unary(call, f64::sin)
}

pub fn cos(call: &Call) -> MathResult<Evaluated> {
    unary(call, f64::cos)
}

pub fn tan(call: &Call) -> MathResult<Evaluated> {
    unary(call, f64::tan)
}

/// Computed as cos/sin rather than 1/tan to match MySQL's rounding.
pub fn cot(call: &Call) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    let x = call.real(0)?;
    let sin = x.sin();
    if sin == 0.0 {
        return Err(call.out_of_range("DOUBLE"));
    }
    Ok(Evaluated::new(x.cos() / sin))
}

pub fn asin(call: &Call) -> MathResult<Evaluated> {
    inverse(call, f64::asin)
}

pub fn acos(call: &Call) -> MathResult<Evaluated> {
    inverse(call, f64::acos)
}

/// `ATAN(y)` or `ATAN(y, x)`, the latter being `atan2`.
pub fn atan(call: &Call) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    let y = call.real(0)?;
    if call.args.len() == 1 {
        return Ok(Evaluated::new(y.atan()));
    }
    let x = call.real(1)?;
    Ok(Evaluated::new(y.atan2(x)))
}
