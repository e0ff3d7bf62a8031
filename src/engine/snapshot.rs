//! Read-only view of the engine handed to the presentation layer.

use crate::core::{HistoryEntry, Operator, Phase};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs after a transition.
///
/// Snapshots are plain values; holding one never observes later changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Main display text
    pub display_text: String,

    /// Rendered stored operand, when an operation is in progress
    pub pending_operand_text: Option<String>,

    /// Operator awaiting its right operand
    pub pending_operator: Option<Operator>,

    /// Completed operations, oldest first
    pub history_entries: Vec<HistoryEntry>,

    /// Derived input phase
    pub phase: Phase,

    /// Text used for failed results in history lines
    pub error_text: String,
}

impl Snapshot {
    /// The small line above the display, e.g. `"5 +"`.
    pub fn pending_text(&self) -> Option<String> {
        match (&self.pending_operand_text, self.pending_operator) {
            (Some(operand), Some(op)) => Some(format!("{operand} {op}")),
            _ => None,
        }
    }

    /// History rendered line by line, oldest first.
    pub fn history_lines(&self) -> Vec<String> {
        self.history_entries
            .iter()
            .map(|entry| entry.render(&self.error_text))
            .collect()
    }

    /// JSON encoding for web front ends.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
