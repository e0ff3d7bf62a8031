//! Calculator engine that applies keypad gestures to its state.

use crate::builder::CalculatorBuilder;
use crate::core::{
    format_number, DisplayBuffer, History, HistoryEntry, InputError, Operator, Outcome, Phase,
};
use crate::engine::config::{CalculatorConfig, ErrorPolicy};
use crate::engine::input::{Digit, Key};
use crate::engine::snapshot::Snapshot;
use std::fmt;

/// Callback invoked with a fresh snapshot after every applied transition.
pub type Subscriber = Box<dyn Fn(&Snapshot) + Send + Sync>;

/// Calculator engine.
///
/// Owns the display buffer, the stored operand, the pending operator, the
/// replace-next flag and the history log. Each gesture method returns
/// `true` when it changed state and `false` when it was ignored; ignored
/// gestures do not notify subscribers.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operator;
/// use abacus::engine::{Calculator, Digit};
///
/// let mut calc = Calculator::new();
/// calc.enter_digit(Digit::new(5).unwrap());
/// calc.choose_operator(Operator::Add);
/// calc.enter_digit(Digit::new(3).unwrap());
/// calc.equals();
///
/// assert_eq!(calc.display_text(), "8");
/// assert_eq!(calc.history().last().unwrap().to_string(), "5 + 3 = 8");
/// ```
pub struct Calculator {
    display: DisplayBuffer,
    stored: Option<f64>,
    operator: Option<Operator>,
    replace_next: bool,
    history: History,
    config: CalculatorConfig,
    subscribers: Vec<Subscriber>,
}

impl Calculator {
    /// Create a calculator with default settings.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Start a builder for a configured calculator.
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    pub(crate) fn with_config(config: CalculatorConfig) -> Self {
        Self {
            display: DisplayBuffer::zero(),
            stored: None,
            operator: None,
            replace_next: false,
            history: History::new(),
            config,
            subscribers: Vec::new(),
        }
    }

    /// Register a change callback.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Current display text.
    pub fn display_text(&self) -> String {
        self.display.render(&self.config.error_text)
    }

    /// Left operand of the operation in progress.
    pub fn stored_operand(&self) -> Option<f64> {
        self.stored
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the next digit starts a fresh number.
    pub fn replace_next(&self) -> bool {
        self.replace_next
    }

    /// The small line above the display, e.g. `"5 +"`.
    pub fn pending_text(&self) -> Option<String> {
        match (self.stored, self.operator) {
            (Some(operand), Some(op)) => Some(format!("{} {op}", format_number(operand))),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        Phase::classify(
            self.display.is_error(),
            self.operator.is_some(),
            self.replace_next,
        )
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// History rendered with the configured error text, oldest first.
    pub fn history_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.history.lines(&self.config.error_text)
    }

    /// Immutable view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display_text: self.display_text(),
            pending_operand_text: self.stored.map(format_number),
            pending_operator: self.operator,
            history_entries: self.history.entries().to_vec(),
            phase: self.phase(),
            error_text: self.config.error_text.clone(),
        }
    }

    /// Apply any gesture.
    pub fn apply(&mut self, key: Key) -> bool {
        match key {
            Key::Digit(digit) => self.enter_digit(digit),
            Key::Decimal => self.enter_decimal(),
            Key::Operator(op) => self.choose_operator(op),
            Key::Equals => self.equals(),
            Key::ClearEntry => self.clear_entry(),
            Key::AllClear => self.all_clear(),
            Key::Backspace => self.backspace(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
        }
    }

    /// Apply the gesture named by a keypad label.
    pub fn press(&mut self, label: &str) -> Result<bool, InputError> {
        let key: Key = label.parse()?;
        Ok(self.apply(key))
    }

    pub fn enter_digit(&mut self, digit: Digit) -> bool {
        if self.latched() {
            return self.ignore("enter_digit");
        }

        if self.starts_fresh() || self.display.is_zero() {
            self.display = DisplayBuffer::Entry(digit.as_char().to_string());
            self.replace_next = false;
        } else {
            self.display.push_digit(digit.as_char());
        }
        self.commit("enter_digit")
    }

    pub fn enter_decimal(&mut self) -> bool {
        if self.latched() {
            return self.ignore("enter_decimal");
        }

        if self.starts_fresh() {
            self.display = DisplayBuffer::Entry("0.".to_string());
            self.replace_next = false;
            return self.commit("enter_decimal");
        }

        if self.display.push_decimal() {
            self.commit("enter_decimal")
        } else {
            self.ignore("enter_decimal")
        }
    }

    /// Choose the operator for the next operation.
    ///
    /// With an operation already pending, it is evaluated first against the
    /// displayed number and its result becomes the new left operand.
    pub fn choose_operator(&mut self, op: Operator) -> bool {
        if self.display.is_error() {
            return self.ignore("choose_operator");
        }

        let current = self.display.value();
        match (self.stored, self.operator) {
            (None, _) => self.stored = Some(current),
            (Some(lhs), Some(pending)) => match self.evaluate(lhs, pending, current) {
                Outcome::Number(result) => {
                    self.stored = Some(result);
                    self.display = DisplayBuffer::from_outcome(Outcome::Number(result));
                }
                error @ Outcome::Error(_) => {
                    self.show_error(error);
                    return self.commit("choose_operator");
                }
            },
            (Some(_), None) => {}
        }

        self.operator = Some(op);
        self.replace_next = true;
        self.commit("choose_operator")
    }

    /// Evaluate the pending operation. Ignored unless one is in progress.
    pub fn equals(&mut self) -> bool {
        if self.display.is_error() {
            return self.ignore("equals");
        }
        let (Some(lhs), Some(op)) = (self.stored, self.operator) else {
            return self.ignore("equals");
        };

        let current = self.display.value();
        let outcome = self.evaluate(lhs, op, current);
        if outcome.is_error() {
            self.show_error(outcome);
        } else {
            self.display = DisplayBuffer::from_outcome(outcome);
            self.stored = None;
            self.operator = None;
            self.replace_next = true;
        }
        self.commit("equals")
    }

    /// Reset the display only; a pending operation survives.
    pub fn clear_entry(&mut self) -> bool {
        self.display = DisplayBuffer::zero();
        self.replace_next = false;
        self.commit("clear_entry")
    }

    /// Reset everything except the history log.
    pub fn all_clear(&mut self) -> bool {
        self.display = DisplayBuffer::zero();
        self.stored = None;
        self.operator = None;
        self.replace_next = false;
        self.commit("all_clear")
    }

    pub fn backspace(&mut self) -> bool {
        if self.latched() {
            return self.ignore("backspace");
        }
        self.display.backspace();
        self.commit("backspace")
    }

    pub fn toggle_sign(&mut self) -> bool {
        if self.display.is_error() {
            return self.ignore("toggle_sign");
        }
        self.display.toggle_sign();
        self.commit("toggle_sign")
    }

    /// Divide the displayed number by 100.
    pub fn percent(&mut self) -> bool {
        if self.display.is_error() {
            return self.ignore("percent");
        }
        let value = self.display.value() / 100.0;
        self.display = DisplayBuffer::from_outcome(Outcome::Number(value));
        self.commit("percent")
    }

    fn evaluate(&mut self, lhs: f64, op: Operator, rhs: f64) -> Outcome {
        let outcome = op.apply(lhs, rhs);
        let entry = HistoryEntry::new(lhs, op, rhs, outcome);
        match outcome {
            Outcome::Error(error) => tracing::warn!(%entry, %error, "evaluation failed"),
            Outcome::Number(_) => tracing::debug!(%entry, "evaluated"),
        }
        self.history.push(entry);
        outcome
    }

    fn show_error(&mut self, outcome: Outcome) {
        self.display = DisplayBuffer::from_outcome(outcome);
        self.stored = None;
        self.operator = None;
        self.replace_next = true;
    }

    fn starts_fresh(&self) -> bool {
        self.replace_next || self.display.is_error()
    }

    fn latched(&self) -> bool {
        self.display.is_error() && self.config.error_policy == ErrorPolicy::Latch
    }

    fn ignore(&self, gesture: &'static str) -> bool {
        tracing::trace!(gesture, phase = self.phase().name(), "gesture ignored");
        false
    }

    fn commit(&self, gesture: &'static str) -> bool {
        tracing::debug!(
            gesture,
            display = %self.display_text(),
            phase = self.phase().name(),
            "transition applied"
        );
        if !self.subscribers.is_empty() {
            let snapshot = self.snapshot();
            for subscriber in &self.subscribers {
                subscriber(&snapshot);
            }
        }
        true
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("display", &self.display)
            .field("stored", &self.stored)
            .field("operator", &self.operator)
            .field("replace_next", &self.replace_next)
            .field("history_len", &self.history.len())
            .field("config", &self.config)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
