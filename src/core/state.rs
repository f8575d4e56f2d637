//! Engine state: the operands being entered and the pending operation.
//!
//! The calculator is a state machine whose states are implicit in the
//! operand text and whether an operation is pending. [`Phase`] names them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::operator::Operator;
use crate::engine::CalcError;

/// Text of the current operand after a reset.
pub const INITIAL_OPERAND: &str = "0";

/// How trigonometric functions interpret their argument.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Convert an argument to radians under this mode.
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            Self::Degrees => value * (std::f64::consts::PI / 180.0),
            Self::Radians => value,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }
}

impl FromStr for AngleMode {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "deg" | "degrees" => Ok(Self::Degrees),
            "rad" | "radians" => Ok(Self::Radians),
            other => Err(CalcError::UnknownToken {
                token: other.to_string(),
            }),
        }
    }
}

/// An operator waiting for its right-hand operand.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PendingOperation {
    /// The selected operator
    pub operator: Operator,
    /// Text of the left-hand operand, as it was when the operator was chosen
    pub operand: String,
}

/// Operand and operator state owned by the engine.
///
/// The previous operand only exists together with its operator, so
/// "an operation is pending iff a previous operand is present" holds by
/// construction.
///
/// # Example
///
/// ```rust
/// use tally::core::EngineState;
///
/// let state = EngineState::default();
/// assert_eq!(state.current(), "0");
/// assert_eq!(state.previous(), "");
/// assert!(state.pending().is_none());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EngineState {
    pub(crate) current: String,
    pub(crate) pending: Option<PendingOperation>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current: INITIAL_OPERAND.to_string(),
            pending: None,
        }
    }
}

impl EngineState {
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Previous operand text, or `""` when nothing is pending.
    pub fn previous(&self) -> &str {
        self.pending
            .as_ref()
            .map_or("", |pending| pending.operand.as_str())
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    pub fn is_initial(&self) -> bool {
        self.current == INITIAL_OPERAND && self.pending.is_none()
    }
}

/// Named view of the implicit engine state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Current operand is `"0"` and nothing is pending
    Initial,
    /// An operand is being entered, nothing is pending
    Entering,
    /// An operator has been chosen and waits for its right-hand operand
    OperatorPending,
    /// A combination or permutation waits for its `k` operand
    AwaitingOperand,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Entering => "Entering",
            Self::OperatorPending => "OperatorPending",
            Self::AwaitingOperand => "AwaitingOperand",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
