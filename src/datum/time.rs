//! Temporal payloads carried by `Datum::Time` and `Datum::Duration`.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;

/// Maximum fractional-second precision.
pub const MAX_FSP: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeType {
    Date,
    Datetime,
    Timestamp,
}

/// Date or date-time value with a fractional-second precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Time {
    pub value: NaiveDateTime,
    pub tp: TimeType,
    pub fsp: u8,
}

/// Signed time span, e.g. a SQL `TIME` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duration {
    pub value: chrono::Duration,
    pub fsp: u8,
}

/// Microseconds truncated to `fsp` digits, returned as that many digits.
fn fraction_digits(micros: u32, fsp: u8) -> i128 {
    let fsp = fsp.min(MAX_FSP);
    (micros / 10u32.pow((MAX_FSP - fsp) as u32)) as i128
}

fn write_fraction(f: &mut fmt::Formatter<'_>, micros: u32, fsp: u8) -> fmt::Result {
    let fsp = fsp.min(MAX_FSP);
    if fsp == 0 {
        return Ok(());
    }
    let digits = format!("{:06}", micros);
    write!(f, ".{}", &digits[..fsp as usize])
}

impl Time {
    pub fn new(value: NaiveDateTime, tp: TimeType, fsp: u8) -> Self {
        Self {
            value,
            tp,
            fsp: fsp.min(MAX_FSP),
        }
    }

    /// Midnight of the given day as a `Datetime`.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let value = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
        Some(Self::new(value, TimeType::Datetime, 0))
    }

    fn micros(&self) -> u32 {
        self.value.nanosecond() / 1_000
    }

    /// Numeric form: `YYYYMMDD` for dates, `YYYYMMDDhhmmss[.f]` otherwise.
    pub fn to_decimal(&self) -> Decimal {
        let date = self.value.date();
        let ymd = date.year() as i128 * 10_000 + date.month() as i128 * 100 + date.day() as i128;
        if self.tp == TimeType::Date {
            return Decimal::from_i128_with_scale(ymd, 0);
        }
        let time = self.value.time();
        let whole = ymd * 1_000_000
            + time.hour() as i128 * 10_000
            + time.minute() as i128 * 100
            + time.second() as i128;
        let mantissa = whole * 10i128.pow(self.fsp as u32) + fraction_digits(self.micros(), self.fsp);
        Decimal::from_i128_with_scale(mantissa, self.fsp as u32)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tp {
            TimeType::Date => write!(f, "{}", self.value.format("%Y-%m-%d")),
            TimeType::Datetime | TimeType::Timestamp => {
                write!(f, "{}", self.value.format("%Y-%m-%d %H:%M:%S"))?;
                write_fraction(f, self.micros(), self.fsp)
            }
        }
    }
}

impl Duration {
    pub fn new(value: chrono::Duration, fsp: u8) -> Self {
        Self {
            value,
            fsp: fsp.min(MAX_FSP),
        }
    }

    pub fn from_hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        let value = chrono::Duration::hours(hours)
            + chrono::Duration::minutes(minutes)
            + chrono::Duration::seconds(seconds);
        Self::new(value, 0)
    }

    /// (negative, hours, minutes, seconds, microseconds)
    fn parts(&self) -> (bool, i64, i64, i64, u32) {
        let total = self.value.num_microseconds().unwrap_or(0);
        let negative = total < 0;
        let abs = total.unsigned_abs();
        let secs = (abs / 1_000_000) as i64;
        let micros = (abs % 1_000_000) as u32;
        (negative, secs / 3600, (secs / 60) % 60, secs % 60, micros)
    }

    /// Numeric form: `±hhmmss[.f]`.
    pub fn to_decimal(&self) -> Decimal {
        let (negative, h, m, s, micros) = self.parts();
        let whole = h as i128 * 10_000 + m as i128 * 100 + s as i128;
        let mut mantissa = whole * 10i128.pow(self.fsp as u32) + fraction_digits(micros, self.fsp);
        if negative {
            mantissa = -mantissa;
        }
        Decimal::from_i128_with_scale(mantissa, self.fsp as u32)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, h, m, s, micros) = self.parts();
        if negative {
            write!(f, "-")?;
        }
        write!(f, "{:02}:{:02}:{:02}", h, m, s)?;
        write_fraction(f, micros, self.fsp)
    }
}
