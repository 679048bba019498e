//! Runtime value model for expression evaluation.

mod convert;
mod time;

use std::fmt;

use rust_decimal::Decimal;

pub use convert::{decimal_to_f64, Coerced, Truncated};
pub use time::{Duration, Time, TimeType, MAX_FSP};

/// Discriminant of a `Datum`, also used as the declared type of an
/// expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatumKind {
    Null,
    Int64,
    Uint64,
    Float64,
    Decimal,
    String,
    Time,
    Duration,
}

impl DatumKind {
    pub fn is_integer(self) -> bool {
        matches!(self, DatumKind::Int64 | DatumKind::Uint64)
    }

    pub fn is_temporal(self) -> bool {
        matches!(self, DatumKind::Time | DatumKind::Duration)
    }
}

impl fmt::Display for DatumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatumKind::Null => "NULL",
            DatumKind::Int64 => "BIGINT",
            DatumKind::Uint64 => "BIGINT UNSIGNED",
            DatumKind::Float64 => "DOUBLE",
            DatumKind::Decimal => "DECIMAL",
            DatumKind::String => "VARCHAR",
            DatumKind::Time => "DATETIME",
            DatumKind::Duration => "TIME",
        };
        f.write_str(name)
    }
}

/// A single SQL value.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Int64(i64),
    Uint64(u64),
    Float64(f64),
    Decimal(Decimal),
    String(String),
    Time(Time),
    Duration(Duration),
}

impl Datum {
    pub fn kind(&self) -> DatumKind {
        match self {
            Datum::Null => DatumKind::Null,
            Datum::Int64(_) => DatumKind::Int64,
            Datum::Uint64(_) => DatumKind::Uint64,
            Datum::Float64(_) => DatumKind::Float64,
            Datum::Decimal(_) => DatumKind::Decimal,
            Datum::String(_) => DatumKind::String,
            Datum::Time(_) => DatumKind::Time,
            Datum::Duration(_) => DatumKind::Duration,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }
}

impl From<i64> for Datum {
    fn from(v: i64) -> Self {
        Datum::Int64(v)
    }
}

impl From<u64> for Datum {
    fn from(v: u64) -> Self {
        Datum::Uint64(v)
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self {
        Datum::Float64(v)
    }
}

impl From<Decimal> for Datum {
    fn from(v: Decimal) -> Self {
        Datum::Decimal(v)
    }
}

impl From<&str> for Datum {
    fn from(v: &str) -> Self {
        Datum::String(v.to_string())
    }
}

impl From<String> for Datum {
    fn from(v: String) -> Self {
        Datum::String(v)
    }
}

impl<T: Into<Datum>> From<Option<T>> for Datum {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Datum::Null)
    }
}

/// String view of the value, as used by `CRC32` and `CONV`.
impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Null => f.write_str("NULL"),
            Datum::Int64(v) => write!(f, "{}", v),
            Datum::Uint64(v) => write!(f, "{}", v),
            Datum::Float64(v) => write!(f, "{}", v),
            Datum::Decimal(v) => write!(f, "{}", v),
            Datum::String(v) => f.write_str(v),
            Datum::Time(v) => write!(f, "{}", v),
            Datum::Duration(v) => write!(f, "{}", v),
        }
    }
}

impl serde::Serialize for Datum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Datum::Null => serializer.serialize_unit(),
            Datum::Int64(v) => serializer.serialize_i64(*v),
            Datum::Uint64(v) => serializer.serialize_u64(*v),
            Datum::Float64(v) => serializer.serialize_f64(*v),
            Datum::String(v) => serializer.serialize_str(v),
            Datum::Decimal(_) | Datum::Time(_) | Datum::Duration(_) => {
                serializer.collect_str(self)
            }
        }
    }
}
