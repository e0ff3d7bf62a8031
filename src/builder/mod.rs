//! Builder API for configuring a calculator.
//!
//! ```
//! use abacus::builder::CalculatorBuilder;
//! use abacus::engine::ErrorPolicy;
//!
//! let calc = CalculatorBuilder::new()
//!     .error_policy(ErrorPolicy::Latch)
//!     .error_text("E")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(calc.display_text(), "0");
//! ```

mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
