//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::core::{parse_number, DEFAULT_ERROR_TEXT};
use crate::engine::{Calculator, CalculatorConfig, ErrorPolicy, Snapshot, Subscriber};

/// Builder for constructing a calculator with a fluent API.
pub struct CalculatorBuilder {
    error_policy: ErrorPolicy,
    error_text: String,
    subscribers: Vec<Subscriber>,
}

impl CalculatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            error_policy: ErrorPolicy::default(),
            error_text: DEFAULT_ERROR_TEXT.to_string(),
            subscribers: Vec::new(),
        }
    }

    /// Set how gestures behave while an error is shown.
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set the text rendered for a failed evaluation.
    pub fn error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Register a change callback.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
        self
    }

    /// Build the calculator.
    /// Returns an error if the error text is empty or reads as a number.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let error_text = self.error_text.trim();
        if error_text.is_empty() {
            return Err(BuildError::EmptyErrorText);
        }
        if !parse_number(error_text).is_nan() || error_text.eq_ignore_ascii_case("nan") {
            return Err(BuildError::NumericErrorText(error_text.to_string()));
        }

        let config = CalculatorConfig {
            error_policy: self.error_policy,
            error_text: error_text.to_string(),
        };
        tracing::debug!(?config, subscribers = self.subscribers.len(), "calculator built");

        let mut calc = Calculator::with_config(config);
        for subscriber in self.subscribers {
            calc.subscribe(subscriber);
        }
        Ok(calc)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
