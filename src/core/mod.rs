//! Core calculator types.
//!
//! This module contains the data the engine works on:
//! - Operand/operator state and its named phases
//! - The arithmetic operators
//! - The bounded calculation history
//!
//! Nothing here performs I/O; the engine mutates these values in place.

mod history;
mod operator;
mod state;

pub use history::{HistoryEntry, HistoryLog, DEFAULT_HISTORY_CAPACITY};
pub use operator::Operator;
pub use state::{AngleMode, EngineState, PendingOperation, Phase, INITIAL_OPERAND};
