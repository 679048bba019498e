//! Pure numeric algorithms behind the math builtins.
//!
//! - prefix: longest-valid-prefix scanning (`CONV`, string coercion)
//! - base: arbitrary-base integer conversion (`CONV`)
//! - round: round/truncate for floats, integers and decimals
//! - rng: MySQL-compatible random stream (`RAND`)

pub mod base;
pub mod prefix;
pub mod rng;
pub mod round;

pub use base::{convert_base, format_radix};
pub use prefix::{float_prefix, has_numeric_prefix, valid_prefix};
pub use rng::MysqlRng;
pub use round::{
    round_decimal, round_f64, round_i64, round_u64, truncate_decimal, truncate_f64, truncate_i64,
    truncate_u64,
};

/// IEEE CRC-32 checksum.
#[inline]
pub fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}
