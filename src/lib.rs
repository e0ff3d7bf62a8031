//! Abacus: a calculator input/evaluation state machine
//!
//! Abacus models the logic behind a four-function calculator widget: number
//! entry, the four basic operations, sign/percent/backspace utilities and a
//! running history of completed calculations. Rendering is left to the
//! caller, which reads immutable snapshots after each gesture.
//!
//! # Core Concepts
//!
//! - **Display Buffer**: the number being typed, or the last result
//! - **Stored Operand / Pending Operator**: the left side of an operation in progress
//! - **Replace-Next**: the next digit starts a fresh number
//! - **History**: append-only log of every evaluated operation
//!
//! # Example
//!
//! ```rust
//! use abacus::Calculator;
//!
//! let mut calc = Calculator::new();
//! for label in ["1", "0", "÷", "4", "="] {
//!     calc.press(label).unwrap();
//! }
//!
//! assert_eq!(calc.display_text(), "2.5");
//!
//! let lines: Vec<String> = calc.history_lines().collect();
//! assert_eq!(lines, vec!["10 ÷ 4 = 2.5"]);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use crate::core::{CalcError, History, HistoryEntry, InputError, Operator, Outcome};
pub use engine::{Calculator, Digit, ErrorPolicy, Key, Snapshot};
