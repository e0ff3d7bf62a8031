//! Build errors for calculator configuration.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Error text must not be empty")]
    EmptyErrorText,

    #[error("Error text '{0}' reads as a number. Choose text that cannot be mistaken for a result")]
    NumericErrorText(String),
}
