//! The display buffer: the number being edited, or the last result.

use super::error::CalcError;
use super::value::{format_number, parse_number, Outcome};
use serde::{Deserialize, Serialize};

/// Text shown as the current number.
///
/// An `Entry` always holds non-empty numeric text; an `Error` stands in
/// for a failed evaluation until the user moves past it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayBuffer {
    Entry(String),
    Error(CalcError),
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::zero()
    }
}

impl DisplayBuffer {
    /// The initial `"0"` buffer.
    pub fn zero() -> Self {
        Self::Entry("0".to_string())
    }

    /// Buffer holding the rendered outcome of an evaluation.
    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Number(value) => Self::Entry(format_number(value)),
            Outcome::Error(error) => Self::Error(error),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// True only for the untouched `"0"` text (not `"-0"` or `"0."`).
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Entry(text) if text == "0")
    }

    /// Entry text, or `None` while an error is shown.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Entry(text) => Some(text),
            Self::Error(_) => None,
        }
    }

    /// Numeric value of the buffer; NaN while an error is shown.
    pub fn value(&self) -> f64 {
        self.text().map_or(f64::NAN, parse_number)
    }

    pub fn render(&self, error_text: &str) -> String {
        match self {
            Self::Entry(text) => text.clone(),
            Self::Error(_) => error_text.to_string(),
        }
    }

    /// Append a digit to the entry text.
    pub(crate) fn push_digit(&mut self, digit: char) {
        match self {
            Self::Entry(text) => text.push(digit),
            Self::Error(_) => *self = Self::Entry(digit.to_string()),
        }
    }

    /// Append a decimal point unless one is already present.
    ///
    /// Returns whether the text changed.
    pub(crate) fn push_decimal(&mut self) -> bool {
        match self {
            Self::Entry(text) if !text.contains('.') => {
                text.push('.');
                true
            }
            _ => false,
        }
    }

    /// Drop the last character, falling back to `"0"` once nothing but a
    /// single digit (optionally signed) would remain.
    pub(crate) fn backspace(&mut self) {
        match self {
            Self::Entry(text) if text.len() > 2 || (text.len() == 2 && !text.contains('-')) => {
                text.pop();
            }
            _ => *self = Self::zero(),
        }
    }

    /// Prepend or strip a leading `-`.
    pub(crate) fn toggle_sign(&mut self) {
        if let Self::Entry(text) = self {
            if text.starts_with('-') {
                text.remove(0);
            } else {
                text.insert(0, '-');
            }
        }
    }
}
