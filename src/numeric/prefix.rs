//! Longest-valid-prefix scanning for numeric strings.

/// Digit value of `c` in the 36-symbol alphabet, case-insensitive.
#[inline]
fn digit_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as u32),
        b'a'..=b'z' => Some((c - b'a') as u32 + 10),
        b'A'..=b'Z' => Some((c - b'A') as u32 + 10),
        _ => None,
    }
}

/// Extract the maximal leading run of `base` digits from `s`.
///
/// A leading `-` is kept, a leading `+` is dropped. Returns an empty string
/// when no digit follows the optional sign.
pub fn valid_prefix(s: &str, base: u32) -> String {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut negative = false;
    if let Some(&c) = bytes.first() {
        if c == b'+' || c == b'-' {
            negative = c == b'-';
            i = 1;
        }
    }
    let start = i;
    while i < bytes.len() {
        match digit_value(bytes[i]) {
            Some(d) if d < base => i += 1,
            _ => break,
        }
    }
    if i == start {
        return String::new();
    }
    let digits = &s[start..i];
    if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    }
}

/// Whether `s` has any numeric prefix at all: after whitespace and an
/// optional sign, a digit or a `.` followed by a digit.
pub fn has_numeric_prefix(s: &str) -> bool {
    let bytes = s.trim_start().as_bytes();
    let rest = match bytes.first() {
        Some(b'+') | Some(b'-') => &bytes[1..],
        _ => bytes,
    };
    match rest {
        [d, ..] if d.is_ascii_digit() => true,
        [b'.', d, ..] => d.is_ascii_digit(),
        _ => false,
    }
}

/// Parse the longest decimal floating-point prefix of `s`.
///
/// Surrounding whitespace is ignored. The flag is false when any
/// non-whitespace input was left unconsumed, including when no digit was
/// found at all (the value is then 0).
pub fn float_prefix(s: &str) -> (f64, bool) {
    let trimmed = s.trim();
    let bytes = trimmed.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        let mut frac_digits = 0;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            frac_digits += 1;
        }
        if digits + frac_digits > 0 {
            i = j;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return (0.0, false);
    }

    // Exponent only counts when at least one exponent digit follows.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    let mut consumed_all = i == bytes.len();
    let mut value = trimmed[..i].parse::<f64>().unwrap_or(0.0);
    if value.is_infinite() {
        value = f64::MAX.copysign(value);
        consumed_all = false;
    }
    (value, consumed_all)
}
