//! Append-only log of completed calculations.
//!
//! Every evaluated binary operation leaves one immutable entry behind,
//! whether it came from `=` or from chaining a second operator.

use super::operator::Operator;
use super::value::{format_number, number_text, Outcome, DEFAULT_ERROR_TEXT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Record of one completed operation.
///
/// # Example
///
/// ```rust
/// use abacus::core::{HistoryEntry, Operator, Outcome};
///
/// let entry = HistoryEntry::new(5.0, Operator::Add, 3.0, Outcome::Number(8.0));
/// assert_eq!(entry.to_string(), "5 + 3 = 8");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left operand
    #[serde(with = "number_text")]
    pub lhs: f64,
    /// Operator that was applied
    pub operator: Operator,
    /// Right operand
    #[serde(with = "number_text")]
    pub rhs: f64,
    /// Number or error produced
    pub result: Outcome,
    /// When the operation was evaluated
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(lhs: f64, operator: Operator, rhs: f64, result: Outcome) -> Self {
        Self {
            lhs,
            operator,
            rhs,
            result,
            timestamp: Utc::now(),
        }
    }

    /// Render as `lhs op rhs = result` with a caller-chosen error text.
    pub fn render(&self, error_text: &str) -> String {
        format!(
            "{} {} {} = {}",
            format_number(self.lhs),
            self.operator,
            format_number(self.rhs),
            self.result.render(error_text)
        )
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_ERROR_TEXT))
    }
}

/// Ordered log of completed operations, oldest first.
///
/// The log is never truncated or reordered. `record` is pure: it returns a
/// new log with the entry appended and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use abacus::core::{History, HistoryEntry, Operator, Outcome};
///
/// let history = History::new();
/// let entry = HistoryEntry::new(2.0, Operator::Multiply, 4.0, Outcome::Number(8.0));
///
/// let updated = history.record(entry);
/// assert_eq!(updated.len(), 1);
/// assert!(history.is_empty()); // Original unchanged
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, returning a new history.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Append in place. The engine's path, avoiding a copy of the log per entry.
    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Replayable iterator over entries, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Rendered lines, oldest first.
    pub fn lines<'a>(&'a self, error_text: &'a str) -> impl Iterator<Item = String> + 'a {
        self.entries.iter().map(move |entry| entry.render(error_text))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Time elapsed between the first and the last entry.
    ///
    /// Returns `None` for an empty log.
    pub fn span(&self) -> Option<Duration> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;

    fn sum(lhs: f64, rhs: f64) -> HistoryEntry {
        HistoryEntry::new(lhs, Operator::Add, rhs, Outcome::Number(lhs + rhs))
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert_eq!(history.len(), 0);
        assert!(history.last().is_none());
        assert!(history.span().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new();
        let new_history = history.record(sum(1.0, 2.0));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn iteration_is_oldest_first_and_replayable() {
        let history = History::new().record(sum(1.0, 1.0)).record(sum(2.0, 2.0));

        let first_pass: Vec<f64> = history.iter().map(|e| e.lhs).collect();
        let second_pass: Vec<f64> = (&history).into_iter().map(|e| e.lhs).collect();

        assert_eq!(first_pass, vec![1.0, 2.0]);
        assert_eq!(first_pass, second_pass);
        assert_eq!(history.last().map(|e| e.lhs), Some(2.0));
    }

    #[test]
    fn error_entries_render_error_text() {
        let entry = HistoryEntry::new(
            10.0,
            Operator::Divide,
            0.0,
            Outcome::Error(CalcError::DivisionByZero),
        );
        assert_eq!(entry.to_string(), "10 ÷ 0 = Error");
        assert_eq!(entry.render("ERR"), "10 ÷ 0 = ERR");
    }

    #[test]
    fn lines_render_every_entry() {
        let history = History::new().record(sum(0.5, 0.25)).record(HistoryEntry::new(
            7.0,
            Operator::Subtract,
            9.0,
            Outcome::Number(-2.0),
        ));

        let lines: Vec<String> = history.lines("Error").collect();
        assert_eq!(lines, vec!["0.5 + 0.25 = 0.75", "7 - 9 = -2"]);
    }

    #[test]
    fn span_measures_first_to_last() {
        let start = Utc::now();
        let mut first = sum(1.0, 1.0);
        first.timestamp = start;
        let mut second = sum(2.0, 2.0);
        second.timestamp = start + chrono::Duration::milliseconds(250);

        let history = History::new().record(first).record(second);
        assert_eq!(history.span(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_entry_has_zero_span() {
        let history = History::new().record(sum(1.0, 1.0));
        assert_eq!(history.span(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn push_appends_in_place() {
        let first = sum(1.0, 1.0);
        let second = sum(2.0, 2.0);

        let mut pushed = History::new();
        pushed.push(first.clone());
        pushed.push(second.clone());

        let recorded = History::new().record(first).record(second);
        assert_eq!(pushed, recorded);
        assert_eq!(pushed.last().map(|e| e.lhs), Some(2.0));
    }

    #[test]
    fn operands_serialize_as_display_text() {
        let entry = HistoryEntry::new(
            f64::INFINITY,
            Operator::Multiply,
            2.0,
            Outcome::Number(f64::INFINITY),
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["lhs"], "Infinity");
        assert_eq!(json["rhs"], "2");
        assert_eq!(json["result"]["Number"], "Infinity");

        let back: HistoryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = History::new().record(sum(5.0, 3.0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
