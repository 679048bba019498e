//! Arbitrary-base integer conversion used by `CONV`.

use super::prefix::valid_prefix;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Render `value` in `base` (2..=36) with upper-case digits.
pub fn format_radix(mut value: u64, base: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let base = base as u64;
    let mut buf = Vec::with_capacity(64);
    while value > 0 {
        buf.push(DIGITS[(value % base) as usize]);
        value /= base;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

/// Convert the numeric prefix of `s` from `from_base` to `to_base`.
///
/// A negative `from_base` reads the input as a signed 64-bit value, a
/// negative `to_base` renders the result as signed. Returns `None` when
/// either base magnitude is outside `2..=36`. Input without a valid prefix
/// converts to `"0"`; magnitudes beyond `u64` saturate.
pub fn convert_base(s: &str, from_base: i64, to_base: i64) -> Option<String> {
    let signed = from_base < 0;
    let ignore_sign = to_base < 0;
    let from = from_base.unsigned_abs();
    let to = to_base.unsigned_abs();
    if !(2..=36).contains(&from) || !(2..=36).contains(&to) {
        return None;
    }

    let prefix = valid_prefix(s.trim(), from as u32);
    if prefix.is_empty() {
        return Some("0".to_string());
    }
    let (mut negative, digits) = match prefix.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, prefix.as_str()),
    };

    let mut value = u64::from_str_radix(digits, from as u32).unwrap_or(u64::MAX);
    if signed {
        if negative && value > i64::MIN.unsigned_abs() {
            value = i64::MIN.unsigned_abs();
        }
        if !negative && value > i64::MAX as u64 {
            value = i64::MAX as u64;
        }
    }
    if negative {
        value = value.wrapping_neg();
    }
    negative = (value as i64) < 0;
    if ignore_sign && negative {
        value = value.wrapping_neg();
    }

    let rendered = format_radix(value, to as u32);
    if negative && ignore_sign {
        Some(format!("-{}", rendered))
    } else {
        Some(rendered)
    }
}
