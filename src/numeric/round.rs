//! Round and truncate to an arbitrary number of decimal digits.
//!
//! `digits` follows SQL `ROUND(x, d)`: positive values keep that many
//! fractional digits, negative values round to tens, hundreds, and so on.
//! Rounding is half away from zero throughout.

use rust_decimal::Decimal;

/// Exact powers of ten up to 1e22; beyond that the literal is parsed so the
/// result is correctly rounded.
fn pow10_f64(exp: u32) -> f64 {
    if exp <= 22 {
        10f64.powi(exp as i32)
    } else {
        format!("1e{}", exp).parse().unwrap_or(f64::INFINITY)
    }
}

fn pow10_i128(exp: u32) -> Option<i128> {
    let mut value: i128 = 1;
    for _ in 0..exp {
        value = value.checked_mul(10)?;
    }
    Some(value)
}

fn clamp_exp(digits: i64) -> u32 {
    digits.unsigned_abs().min(400) as u32
}

fn rescale_f64(x: f64, digits: i64, op: fn(f64) -> f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let shift = pow10_f64(clamp_exp(digits));
    if digits < 0 && shift.is_infinite() {
        return 0.0;
    }
    let tmp = if digits >= 0 { x * shift } else { x / shift };
    // Already integral at this scale: nothing to drop.
    if !tmp.is_finite() || tmp == tmp.trunc() {
        return x;
    }
    // Scaling error of a couple of ulps must not move a value across an
    // integer boundary, otherwise 0.29 would truncate to 0.28. Snap only
    // when `x` is exactly the double nearest to `nearest` at this scale.
    let nearest = tmp.round();
    let unscaled = if digits >= 0 {
        nearest / shift
    } else {
        nearest * shift
    };
    let scaled = if (tmp - nearest).abs() <= tmp.abs() * f64::EPSILON * 2.0 && unscaled == x {
        nearest
    } else {
        op(tmp)
    };
    if digits >= 0 {
        scaled / shift
    } else {
        scaled * shift
    }
}

pub fn round_f64(x: f64, digits: i64) -> f64 {
    rescale_f64(x, digits, f64::round)
}

pub fn truncate_f64(x: f64, digits: i64) -> f64 {
    rescale_f64(x, digits, f64::trunc)
}

/// Drop `drop` decimal digits from `value`, rounding half away from zero
/// when `round` is set.
fn drop_digits(value: i128, drop: u32, round: bool) -> i128 {
    // |value| < 2^96 < 10^29, so anything past 10^30 is below one half.
    if drop > 30 {
        return 0;
    }
    let Some(p) = pow10_i128(drop) else {
        return 0;
    };
    let mut q = value / p;
    if round {
        let r = (value % p).abs();
        if r >= p - r {
            q += value.signum();
        }
    }
    q
}

fn rescale_int(value: i128, digits: i64, round: bool) -> Option<i128> {
    if digits >= 0 {
        return Some(value);
    }
    let exp = clamp_exp(digits);
    let q = drop_digits(value, exp, round);
    if q == 0 {
        return Some(0);
    }
    q.checked_mul(pow10_i128(exp)?)
}

/// `None` when the rounded value leaves the `i64` range.
pub fn round_i64(value: i64, digits: i64) -> Option<i64> {
    rescale_int(value as i128, digits, true).and_then(|v| i64::try_from(v).ok())
}

pub fn truncate_i64(value: i64, digits: i64) -> Option<i64> {
    rescale_int(value as i128, digits, false).and_then(|v| i64::try_from(v).ok())
}

/// `None` when the rounded value leaves the `u64` range.
pub fn round_u64(value: u64, digits: i64) -> Option<u64> {
    rescale_int(value as i128, digits, true).and_then(|v| u64::try_from(v).ok())
}

pub fn truncate_u64(value: u64, digits: i64) -> Option<u64> {
    rescale_int(value as i128, digits, false).and_then(|v| u64::try_from(v).ok())
}

fn rescale_decimal(value: Decimal, digits: i64, round: bool) -> Option<Decimal> {
    let scale = value.scale() as i64;
    let drop = scale - digits;
    if drop <= 0 {
        return Some(value);
    }
    let q = drop_digits(value.mantissa(), clamp_exp(drop), round);
    if digits >= 0 {
        return Decimal::try_from_i128_with_scale(q, digits as u32).ok();
    }
    if q == 0 {
        return Some(Decimal::ZERO);
    }
    let widened = q.checked_mul(pow10_i128(clamp_exp(digits))?)?;
    Decimal::try_from_i128_with_scale(widened, 0).ok()
}

/// Round on the mantissa/scale representation without passing through
/// floating point. `None` when the result does not fit a `Decimal`.
pub fn round_decimal(value: Decimal, digits: i64) -> Option<Decimal> {
    rescale_decimal(value, digits, true)
}

pub fn truncate_decimal(value: Decimal, digits: i64) -> Option<Decimal> {
    rescale_decimal(value, digits, false)
}
