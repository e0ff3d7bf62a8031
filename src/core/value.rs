//! Numeric values, evaluation outcomes, and their text conversions.
//!
//! The display and the history share one number-to-text conversion so a
//! result always reads the same wherever it is shown.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown in place of a number when evaluation fails.
pub const DEFAULT_ERROR_TEXT: &str = "Error";

/// Result of evaluating a binary operation.
///
/// # Example
///
/// ```rust
/// use abacus::core::{CalcError, Outcome};
///
/// assert_eq!(Outcome::Number(8.0).to_string(), "8");
/// assert_eq!(Outcome::Error(CalcError::DivisionByZero).to_string(), "Error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// A double-precision result
    Number(#[serde(with = "number_text")] f64),
    /// A distinguished non-numeric result
    Error(CalcError),
}

impl Outcome {
    /// Numeric value, if the outcome is not an error.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Render with a caller-chosen error text.
    pub fn render(&self, error_text: &str) -> String {
        match self {
            Self::Number(value) => format_number(*value),
            Self::Error(_) => error_text.to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_ERROR_TEXT))
    }
}

/// Convert a number to display text.
///
/// Produces the shortest text that round-trips to the same value. Integral
/// values carry no fraction, negative zero prints as `0`, and very large or
/// very small magnitudes switch to exponent form with an explicit sign.
///
/// ```rust
/// use abacus::core::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Parse display text into a number.
///
/// Never fails: the longest numeric prefix is used, and text with no
/// numeric prefix (such as the error text) yields NaN.
///
/// ```rust
/// use abacus::core::parse_number;
///
/// assert_eq!(parse_number("12.5"), 12.5);
/// assert_eq!(parse_number("12."), 12.0);
/// assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_number("Error").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let (sign, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let end = numeric_prefix_len(unsigned);
    unsigned[..end]
        .parse::<f64>()
        .map(|value| sign * value)
        .unwrap_or(f64::NAN)
}

/// Serde adapter storing an `f64` as its display text.
///
/// JSON has no encoding for NaN or the infinities, so numbers travel as
/// the same text the display shows and read back through [`parse_number`].
pub(crate) mod number_text {
    use super::{format_number, parse_number};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_number(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        let value = parse_number(&text);
        if value.is_nan() && text != "NaN" {
            return Err(D::Error::custom(format!("'{text}' is not a number")));
        }
        Ok(value)
    }
}

/// Length of the leading `digits[.digits][e[+-]digits]` run.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let scan_digits = |mut cursor: usize| {
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        cursor
    };

    let mut end = scan_digits(0);
    let mut digits = end;

    if bytes.get(end) == Some(&b'.') {
        let after = scan_digits(end + 1);
        let fraction = after - end - 1;
        if digits + fraction > 0 {
            end = after;
            digits += fraction;
        }
    }

    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let after = scan_digits(cursor);
        if after > cursor {
            end = after;
        }
    }

    end
}
