//! Coercions from `Datum` to the primitive types functions compute with.
//!
//! String inputs are interpreted by their longest numeric prefix. When the
//! whole string is not numeric, the conversion fails with a `Truncated`
//! that still carries the best-effort value, so each function can decide
//! whether that is an error, a warning, or acceptable.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::Datum;
use crate::error::MathError;
use crate::numeric::{float_prefix, has_numeric_prefix};

/// A lossy string conversion: the partial value and the offending input.
///
/// `has_prefix` is false when no digit could be read at all, in which case
/// `partial` is only a default.
#[derive(Debug, Clone, PartialEq)]
pub struct Truncated<T> {
    pub partial: T,
    pub input: String,
    pub has_prefix: bool,
}

impl<T> Truncated<T> {
    pub fn into_error(self, target: &str) -> MathError {
        MathError::truncated(target, &self.input)
    }
}

pub type Coerced<T> = Result<T, Truncated<T>>;

/// Decimal to float through its canonical text, which parses to the
/// correctly rounded double.
pub fn decimal_to_f64(d: &Decimal) -> f64 {
    d.to_string().parse::<f64>().unwrap_or(0.0)
}

fn str_to_f64(s: &str) -> Coerced<f64> {
    match float_prefix(s) {
        (value, true) => Ok(value),
        (partial, false) => Err(Truncated {
            partial,
            input: s.to_string(),
            has_prefix: has_numeric_prefix(s),
        }),
    }
}

fn decimal_to_i64(d: &Decimal) -> i64 {
    let rounded = d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if d.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

impl Datum {
    /// Floating-point view. `Null` reads as 0; callers check for null first.
    pub fn to_f64(&self) -> Coerced<f64> {
        match self {
            Datum::Null => Ok(0.0),
            Datum::Int64(v) => Ok(*v as f64),
            Datum::Uint64(v) => Ok(*v as f64),
            Datum::Float64(v) => Ok(*v),
            Datum::Decimal(d) => Ok(decimal_to_f64(d)),
            Datum::String(s) => str_to_f64(s),
            Datum::Time(t) => Ok(decimal_to_f64(&t.to_decimal())),
            Datum::Duration(d) => Ok(decimal_to_f64(&d.to_decimal())),
        }
    }

    /// Integer view, rounding half away from zero and clamping to the
    /// `i64` range.
    pub fn to_i64(&self) -> Coerced<i64> {
        match self {
            Datum::Null => Ok(0),
            Datum::Int64(v) => Ok(*v),
            Datum::Uint64(v) => Ok(i64::try_from(*v).unwrap_or(i64::MAX)),
            Datum::Float64(v) => Ok(v.round() as i64),
            Datum::Decimal(d) => Ok(decimal_to_i64(d)),
            Datum::String(s) => str_to_f64(s)
                .map(|v| v.round() as i64)
                .map_err(|t| Truncated {
                    partial: t.partial.round() as i64,
                    input: t.input,
                    has_prefix: t.has_prefix,
                }),
            Datum::Time(t) => Ok(decimal_to_i64(&t.to_decimal())),
            Datum::Duration(d) => Ok(decimal_to_i64(&d.to_decimal())),
        }
    }
}
