//! Arithmetic builtins.

use rust_decimal::Decimal;

use super::Call;
use crate::context::Evaluated;
use crate::datum::Datum;
use crate::error::MathResult;
use crate::numeric::{
    round_decimal, round_f64, round_i64, round_u64, truncate_decimal, truncate_f64, truncate_i64,
    truncate_u64,
};

#[inline]
fn float(v: f64) -> MathResult<Evaluated> {
    Ok(Evaluated::new(v))
}

fn finite(call: &Call, v: f64) -> MathResult<Evaluated> {
    if v.is_infinite() {
        return Err(call.out_of_range("DOUBLE"));
    }
    float(v)
}

pub fn abs(call: &Call) -> MathResult<Evaluated> {
    match call.arg(0) {
        Datum::Null => Ok(Evaluated::null()),
        Datum::Int64(v) => v
            .checked_abs()
            .map(Evaluated::new)
            .ok_or_else(|| call.out_of_range("BIGINT")),
        Datum::Uint64(v) => Ok(Evaluated::new(*v)),
        Datum::Decimal(d) => Ok(Evaluated::new(d.abs())),
        _ => float(call.real(0)?.abs()),
    }
}

fn ceil_or_floor(
    call: &Call,
    float_op: fn(f64) -> f64,
    dec_op: fn(&Decimal) -> Decimal,
) -> MathResult<Evaluated> {
    match call.arg(0) {
        Datum::Null => Ok(Evaluated::null()),
        Datum::Int64(_) | Datum::Uint64(_) => Ok(Evaluated::new(call.arg(0).clone())),
        Datum::Decimal(d) => Ok(Evaluated::new(dec_op(d))),
        _ => {
            let (v, warning) = call.real_lenient(0);
            Ok(Evaluated::with_warning(float_op(v), warning))
        }
    }
}

pub fn ceil(call: &Call) -> MathResult<Evaluated> {
    ceil_or_floor(call, f64::ceil, Decimal::ceil)
}

pub fn floor(call: &Call) -> MathResult<Evaluated> {
    ceil_or_floor(call, f64::floor, Decimal::floor)
}

fn sign_of_f64(v: f64) -> i64 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

pub fn sign(call: &Call) -> MathResult<Evaluated> {
    let sign = match call.arg(0) {
        Datum::Null => return Ok(Evaluated::null()),
        Datum::Int64(v) => v.signum(),
        Datum::Uint64(v) => (*v > 0) as i64,
        Datum::Decimal(d) if d.is_zero() => 0,
        Datum::Decimal(d) if d.is_sign_negative() => -1,
        Datum::Decimal(_) => 1,
        _ => {
            let (v, warning) = call.real_prefixed(0)?;
            return Ok(Evaluated::with_warning(sign_of_f64(v), warning));
        }
    };
    Ok(Evaluated::new(sign))
}

/// Shared body of ROUND and TRUNCATE; the result keeps the integer or
/// decimal kind of the first argument.
fn rescale(call: &Call, round: bool) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    let digits = if call.args.len() > 1 { call.int(1)? } else { 0 };
    match call.arg(0) {
        Datum::Int64(v) => {
            let op = if round { round_i64 } else { truncate_i64 };
            op(*v, digits)
                .map(Evaluated::new)
                .ok_or_else(|| call.out_of_range("BIGINT"))
        }
        Datum::Uint64(v) => {
            let op = if round { round_u64 } else { truncate_u64 };
            op(*v, digits)
                .map(Evaluated::new)
                .ok_or_else(|| call.out_of_range("BIGINT UNSIGNED"))
        }
        Datum::Decimal(d) => {
            let op = if round { round_decimal } else { truncate_decimal };
            op(*d, digits)
                .map(Evaluated::new)
                .ok_or_else(|| call.out_of_range("DECIMAL"))
        }
        _ => {
            let x = call.real(0)?;
            let op = if round { round_f64 } else { truncate_f64 };
            finite(call, op(x, digits))
        }
    }
}

pub fn round(call: &Call) -> MathResult<Evaluated> {
    rescale(call, true)
}

pub fn truncate(call: &Call) -> MathResult<Evaluated> {
    rescale(call, false)
}

pub fn exp(call: &Call) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    let x = call.real(0)?;
    finite(call, x.exp())
}

/// `LOG(x)` is the natural logarithm, `LOG(b, x)` the logarithm of `x` in
/// base `b`. Non-positive arguments and base 1 are undefined (NULL).
pub fn log(call: &Call) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    if call.args.len() == 1 {
        let x = call.real(0)?;
        if x <= 0.0 {
            return Ok(Evaluated::null());
        }
        return float(x.ln());
    }
    let base = call.real(0)?;
    let x = call.real(1)?;
    if base <= 0.0 || base == 1.0 || x <= 0.0 {
        return Ok(Evaluated::null());
    }
    float(x.ln() / base.ln())
}

fn positive_log(call: &Call, op: fn(f64) -> f64) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    let x = call.real(0)?;
    if x <= 0.0 {
        return Ok(Evaluated::null());
    }
    float(op(x))
}

pub fn log2(call: &Call) -> MathResult<Evaluated> {
    positive_log(call, f64::log2)
}

pub fn log10(call: &Call) -> MathResult<Evaluated> {
    positive_log(call, f64::log10)
}

pub fn pow(call: &Call) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    let x = call.real(0)?;
    let y = call.real(1)?;
    let result = x.powf(y);
    if result.is_nan() {
        return Ok(Evaluated::null());
    }
    finite(call, result)
}

pub fn sqrt(call: &Call) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    let x = call.real(0)?;
    if x < 0.0 {
        return Ok(Evaluated::null());
    }
    float(x.sqrt())
}

pub fn degrees(call: &Call) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    let (x, warning) = call.real_prefixed(0)?;
    Ok(Evaluated::with_warning(x.to_degrees(), warning))
}

pub fn radians(call: &Call) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    float(call.real(0)?.to_radians())
}
