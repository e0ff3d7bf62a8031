//! Named phases of the calculator's input cycle.
//!
//! The engine keeps no explicit state tag; a `Phase` is derived from its
//! fields so the presentation layer can style keys without reimplementing
//! the transition rules.

use serde::{Deserialize, Serialize};

/// Position in the calculator's input cycle.
///
/// # Example
///
/// ```rust
/// use abacus::core::Phase;
///
/// let phase = Phase::classify(false, true, true);
/// assert_eq!(phase, Phase::AwaitingOperand);
/// assert_eq!(phase.name(), "AwaitingOperand");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Typing the first number, no operator chosen
    Entering,
    /// Operator chosen, the next digit starts the right operand
    AwaitingOperand,
    /// Operator chosen and the right operand is being typed
    EnteringOperand,
    /// A result from `=` is shown
    ShowingResult,
    /// A failed evaluation is shown
    Error,
}

impl Phase {
    /// Derive the phase from the engine fields.
    pub fn classify(is_error: bool, operator_pending: bool, replace_next: bool) -> Self {
        match (is_error, operator_pending, replace_next) {
            (true, _, _) => Self::Error,
            (false, true, true) => Self::AwaitingOperand,
            (false, true, false) => Self::EnteringOperand,
            (false, false, true) => Self::ShowingResult,
            (false, false, false) => Self::Entering,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::EnteringOperand => "EnteringOperand",
            Self::ShowingResult => "ShowingResult",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// True while an operator waits for its right operand.
    pub fn has_pending_operator(&self) -> bool {
        matches!(self, Self::AwaitingOperand | Self::EnteringOperand)
    }
}
