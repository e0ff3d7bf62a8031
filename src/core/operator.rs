//! The four binary operators and their evaluation.

use super::error::{CalcError, InputError};
use super::value::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary arithmetic operator.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Operator, Outcome};
///
/// let op: Operator = "÷".parse().unwrap();
/// assert_eq!(op, Operator::Divide);
/// assert_eq!(Operator::Multiply.apply(6.0, 7.0), Outcome::Number(42.0));
/// assert!(op.apply(1.0, 0.0).is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Glyph shown on the keypad and in history lines.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Evaluate `lhs op rhs` in double precision.
    ///
    /// Division by zero (of either sign) yields [`CalcError::DivisionByZero`].
    pub fn apply(self, lhs: f64, rhs: f64) -> Outcome {
        match self {
            Self::Add => Outcome::Number(lhs + rhs),
            Self::Subtract => Outcome::Number(lhs - rhs),
            Self::Multiply => Outcome::Number(lhs * rhs),
            Self::Divide if rhs == 0.0 => Outcome::Error(CalcError::DivisionByZero),
            Self::Divide => Outcome::Number(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' | '−' => Ok(Self::Subtract),
            '×' | '*' | 'x' | 'X' => Ok(Self::Multiply),
            '÷' | '/' => Ok(Self::Divide),
            other => Err(InputError::UnknownOperator(other.to_string())),
        }
    }
}

impl FromStr for Operator {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(InputError::UnknownOperator(s.to_string())),
        }
    }
}
