//! Lenient text parsing for form fields
//!
//! Number boxes on the form accept whatever the user types. Instead of
//! rejecting bad text, each field reads the longest numeric prefix and falls
//! back to 0 when there is none:
//! - `"12abc"` reads as 12
//! - `"  7"` reads as 7
//! - `"abc"` and `""` read as 0
//!
//! This module also splits terminal command lines into a field and its text.

use crate::types::Field;
use crate::{CalculatorError, Result};

/// Parse the leading integer of `text`, or 0.
///
/// Fractional parts are dropped (`"4.9"` reads as 4). Negative numbers read
/// as 0 and values beyond `u32::MAX` saturate.
pub fn parse_int_or_zero(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 || negative {
        return 0;
    }

    digits[..end].bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    })
}

/// Parse the leading real number of `text`, or 0.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Infinite results read as 0 so a distance is always a
/// finite number.
pub fn parse_float_or_zero(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let end = numeric_prefix_len(trimmed);
    if end == 0 {
        return 0.0;
    }

    match trimmed[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Length of the longest prefix that forms a decimal literal.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
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

    i
}

/// Split a terminal line into `(field, text)`.
///
/// Returns `Ok(None)` for blank lines and `#` comments. The text is whatever
/// follows the field word, trimmed.
pub fn split_command(line: &str) -> Result<Option<(Field, String)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let field = word.parse::<Field>().map_err(|_| {
        CalculatorError::invalid_command(line, format!("unknown field '{}'", word))
    })?;

    Ok(Some((field, rest.to_string())))
}
