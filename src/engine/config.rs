//! Engine configuration.

use crate::core::DEFAULT_ERROR_TEXT;
use serde::{Deserialize, Serialize};

/// How the engine treats gestures while an error is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Digits and `.` start a fresh number; `C` and `⌫` show `0`.
    /// Operators, `=`, `±` and `%` are ignored.
    #[default]
    ResetOnInput,

    /// Only `C` and `AC` leave the error; every other gesture is ignored.
    Latch,
}

/// Settings fixed when the calculator is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Error-display behavior
    pub error_policy: ErrorPolicy,

    /// Text rendered for a failed evaluation
    pub error_text: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::default(),
            error_text: DEFAULT_ERROR_TEXT.to_string(),
        }
    }
}
