//! Bicycle tire pressure calculator.
//!
//! The [`domain`] module holds the pressure formula and its typed inputs and
//! can be used without the desktop UI that ships in the binary.

pub mod domain;
pub mod util;

pub use domain::{calculate, CalculationError, CalculationResult, CalculatorInput};
