//! Typed user gestures.

use crate::core::{InputError, Operator};
use std::fmt;
use std::str::FromStr;

/// A decimal digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, InputError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InputError::DigitOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(InputError::InvalidDigit(c))
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One keypad gesture.
///
/// Labels match the keypad: `0`-`9`, `.`, the operator glyphs, `=`, `C`,
/// `AC`, `⌫`, `±` and `%`.
///
/// # Example
///
/// ```rust
/// use abacus::engine::Key;
/// use abacus::core::Operator;
///
/// let key: Key = "×".parse().unwrap();
/// assert_eq!(key, Key::Operator(Operator::Multiply));
/// assert_eq!("AC".parse::<Key>().unwrap(), Key::AllClear);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    ClearEntry,
    AllClear,
    Backspace,
    ToggleSign,
    Percent,
}

impl Key {
    /// Keypad label for this key.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(digit) => digit.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::ClearEntry => "C".to_string(),
            Self::AllClear => "AC".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

impl FromStr for Key {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let key = match label {
            "." => Self::Decimal,
            "=" => Self::Equals,
            "C" => Self::ClearEntry,
            "AC" => Self::AllClear,
            "⌫" => Self::Backspace,
            "±" => Self::ToggleSign,
            "%" => Self::Percent,
            _ => {
                let mut chars = label.chars();
                let only = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(InputError::UnknownKey(s.to_string())),
                };
                if let Ok(digit) = Digit::try_from(only) {
                    Self::Digit(digit)
                } else {
                    Operator::try_from(only)
                        .map(Self::Operator)
                        .map_err(|_| InputError::UnknownKey(s.to_string()))?
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
