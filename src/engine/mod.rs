//! The calculator engine.
//!
//! [`CalculatorEngine`] is the entry point for a UI: it receives digit,
//! operator and function tokens, keeps the operands, and records finished
//! calculations in its history.
//!
//! # Key Concepts
//!
//! - **Outcomes**: successful calls report whether anything changed, or that
//!   a second operand is needed
//! - **Errors**: domain errors leave the state untouched, division by zero
//!   resets it; unparsable operands are silently ignored
//! - **Two-step functions**: combination and permutation ask for `k` through
//!   an [`OperandRequest`] instead of blocking

mod calculator;
mod error;
mod function;

pub use calculator::{CalculatorEngine, Outcome};
pub use error::CalcError;
pub use function::{Constant, OperandRequest, ScientificFunction, Selection};
