//! Error types shared by the calculator core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure produced by evaluating a binary operation.
///
/// Evaluation errors are never raised; they travel as values inside
/// [`Outcome::Error`](super::Outcome) and are rendered as the error text.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors raised while turning raw gestures (characters, button labels)
/// into typed calculator input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid digit '{0}'. Expected 0-9")]
    InvalidDigit(char),

    #[error("Digit value {0} is out of range 0-9")]
    DigitOutOfRange(u8),

    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("Unknown key label '{0}'")]
    UnknownKey(String),
}
