//! Core calculator types and logic.
//!
//! This module contains the pure pieces of the calculator:
//! - Operators and their evaluation
//! - Number rendering and parsing shared by display and history
//! - The display buffer and its primitive edits
//! - The append-only history log
//!
//! Nothing here performs I/O or logging; the engine layers those on top.

mod display;
mod error;
mod history;
mod operator;
mod phase;
mod value;

pub use display::DisplayBuffer;
pub use error::{CalcError, InputError};
pub use history::{History, HistoryEntry};
pub use operator::Operator;
pub use phase::Phase;
pub use value::{format_number, parse_number, Outcome, DEFAULT_ERROR_TEXT};
