//! Binary operators applied between the previous and current operand.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::engine::CalcError;
use crate::format::render_number;
use crate::math;

/// Arithmetic operator selected with `choose_operator`.
///
/// # Example
///
/// ```rust
/// use tally::core::Operator;
///
/// let op: Operator = "×".parse().unwrap();
/// assert_eq!(op, Operator::Multiply);
/// assert_eq!(op.symbol(), "×");
/// assert_eq!("*".parse::<Operator>().unwrap(), Operator::Multiply);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Symbol shown next to the previous operand.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Apply the operator to two parsed operands.
    ///
    /// The result is unrounded. Dividing by exactly zero is the only failure.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            Self::Power => Ok(math::integer_power(lhs, rhs)),
        }
    }

    /// History text for `lhs OP rhs`. Power renders as `base^exponent`.
    pub fn expression(&self, lhs: f64, rhs: f64) -> String {
        let (lhs, rhs) = (render_number(lhs), render_number(rhs));
        match self {
            Self::Power => format!("{lhs}^{rhs}"),
            _ => format!("{lhs} {} {rhs}", self.symbol()),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "×" | "*" | "x" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            "^" => Ok(Self::Power),
            other => Err(CalcError::UnknownToken {
                token: other.to_string(),
            }),
        }
    }
}
