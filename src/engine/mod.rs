//! Calculator engine: the stateful shell around the pure core.
//!
//! # Key Concepts
//!
//! - **Gestures**: typed keypad input (`Key`, `Digit`), parsed from labels
//! - **Calculator**: applies one gesture at a time and records history
//! - **Snapshots**: immutable views pushed to subscribers after each change

mod calculator;
mod config;
mod input;
mod snapshot;

pub use calculator::{Calculator, Subscriber};
pub use config::{CalculatorConfig, ErrorPolicy};
pub use input::{Digit, Key};
pub use snapshot::Snapshot;
