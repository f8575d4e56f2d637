//! Engine error types.

use crate::math::DomainError;
use thiserror::Error;

/// Errors reported by engine operations and token parsing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    /// An operand is not a number. The engine treats this as a silent no-op
    #[error("Operand '{input}' is not a number")]
    Parse { input: String },

    /// A function was applied outside its domain. Engine state is unchanged
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Division by exactly zero. The engine has been reset
    #[error("Division by zero is impossible")]
    DivisionByZero,

    /// A button or key token did not name an operator, function or constant
    #[error("Unknown token '{token}'")]
    UnknownToken { token: String },
}

impl CalcError {
    /// True when the engine was returned to its initial state.
    pub fn resets_engine(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    /// True for errors the UI should show to the user.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::DivisionByZero)
    }
}
