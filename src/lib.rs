//! Tally: a calculator engine
//!
//! Tally is the logic behind a scientific calculator UI. The UI forwards
//! button and key presses to a [`CalculatorEngine`] and renders the display
//! strings and history it exposes; everything else (layout, theming, sound)
//! stays in the UI.
//!
//! # Core Concepts
//!
//! - **Engine**: a state machine over the current operand and an optional
//!   pending operation, with operator chaining
//! - **Math**: pure numeric functions with domain validation
//! - **History**: a bounded, newest-first log of completed calculations
//! - **Formatting**: thousands grouping for the display
//! - **Checkpoints**: serializable snapshots of a session
//!
//! # Example
//!
//! ```rust
//! use tally::{CalculatorEngine, Operator, ScientificFunction};
//!
//! let mut engine = CalculatorEngine::new();
//! for digit in "1250".chars() {
//!     engine.append_digit(digit);
//! }
//! engine.choose_operator(Operator::Multiply).unwrap();
//! engine.append_digit('4');
//! engine.compute().unwrap();
//! assert_eq!(engine.current_display(), "5 000");
//!
//! engine.apply_scientific_function(ScientificFunction::Sqrt).unwrap();
//! assert_eq!(engine.current_operand(), "70.7106781187");
//! assert_eq!(engine.history().len(), 2);
//! ```

pub mod checkpoint;
pub mod config;
pub mod core;
pub mod engine;
pub mod format;
pub mod math;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::{CalculatorConfig, ConfigBuilder, ConfigError};
pub use crate::core::{AngleMode, HistoryEntry, HistoryLog, Operator, Phase};
pub use engine::{CalcError, CalculatorEngine, Constant, Outcome, ScientificFunction};
pub use format::NumberFormatter;
pub use math::{DomainError, DomainViolation};
