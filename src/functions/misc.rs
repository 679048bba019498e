//! CRC32, CONV and PI.

use super::Call;
use crate::context::Evaluated;
use crate::datum::Datum;
use crate::error::MathResult;
use crate::numeric::{self, convert_base};

pub fn crc32(call: &Call) -> MathResult<Evaluated> {
    match call.arg(0) {
        Datum::Null => Ok(Evaluated::null()),
        Datum::String(s) => Ok(Evaluated::new(numeric::crc32(s.as_bytes()) as u64)),
        other => Ok(Evaluated::new(
            numeric::crc32(other.to_string().as_bytes()) as u64,
        )),
    }
}

/// `CONV(n, from_base, to_base)`. Never fails: unusable bases give NULL and
/// unparsable input gives "0".
pub fn conv(call: &Call) -> MathResult<Evaluated> {
    if call.any_null() {
        return Ok(Evaluated::null());
    }
    let input = call.arg(0).to_string();
    let from = call.arg(1).to_i64().unwrap_or_else(|t| t.partial);
    let to = call.arg(2).to_i64().unwrap_or_else(|t| t.partial);
    Ok(convert_base(&input, from, to)
        .map(Evaluated::new)
        .unwrap_or_else(Evaluated::null))
}

pub fn pi() -> MathResult<Evaluated> {
    Ok(Evaluated::new(std::f64::consts::PI))
}
