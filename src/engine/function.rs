//! Scientific functions, constants and the second-operand request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CalcError;
use crate::core::AngleMode;
use crate::format::render_number;
use crate::math::domain::{ensure, non_negative, positive, within_unit_interval};
use crate::math::{self, DomainError};

/// Functions applied to the current operand.
///
/// # Example
///
/// ```rust
/// use tally::engine::ScientificFunction;
///
/// let function: ScientificFunction = "sqrt".parse().unwrap();
/// assert_eq!(function, ScientificFunction::Sqrt);
/// assert!(ScientificFunction::Sin.uses_angle());
/// assert!(ScientificFunction::Combination.needs_second_operand());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    Ln,
    Log,
    Sqrt,
    Square,
    Cube,
    Cbrt,
    Abs,
    Negate,
    Percent,
    Factorial,
    Combination,
    Permutation,
}

/// What evaluating a function against the current operand produced.
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum Evaluation {
    Value(f64),
    NeedsOperand(Selection),
}

impl ScientificFunction {
    pub const ALL: [ScientificFunction; 19] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Exp,
        Self::Ln,
        Self::Log,
        Self::Sqrt,
        Self::Square,
        Self::Cube,
        Self::Cbrt,
        Self::Abs,
        Self::Negate,
        Self::Percent,
        Self::Factorial,
        Self::Combination,
        Self::Permutation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Cbrt => "cbrt",
            Self::Abs => "abs",
            Self::Negate => "negate",
            Self::Percent => "percent",
            Self::Factorial => "factorial",
            Self::Combination => "combination",
            Self::Permutation => "permutation",
        }
    }

    /// Trigonometric functions read their argument through the angle mode.
    pub fn uses_angle(&self) -> bool {
        matches!(
            self,
            Self::Sin | Self::Cos | Self::Tan | Self::Asin | Self::Acos | Self::Atan
        )
    }

    pub fn needs_second_operand(&self) -> bool {
        self.selection().is_some()
    }

    pub fn selection(&self) -> Option<Selection> {
        match self {
            Self::Combination => Some(Selection::Combination),
            Self::Permutation => Some(Selection::Permutation),
            _ => None,
        }
    }

    /// Evaluate against the current operand `x`.
    ///
    /// Domain checks look at `x` itself; angle functions then compute on the
    /// value converted by `mode`.
    pub(crate) fn evaluate(&self, x: f64, mode: AngleMode) -> Result<Evaluation, DomainError> {
        let angle = if self.uses_angle() {
            mode.to_radians(x)
        } else {
            x
        };

        let value = match self {
            Self::Sin => angle.sin(),
            Self::Cos => angle.cos(),
            Self::Tan => angle.tan(),
            Self::Asin => {
                ensure("asin", vec![within_unit_interval("x", x)])?;
                angle.asin()
            }
            Self::Acos => {
                ensure("acos", vec![within_unit_interval("x", x)])?;
                angle.acos()
            }
            Self::Atan => angle.atan(),
            Self::Exp => x.exp(),
            Self::Ln => {
                ensure("ln", vec![positive("x", x)])?;
                x.ln()
            }
            Self::Log => {
                ensure("log", vec![positive("x", x)])?;
                x.log10()
            }
            Self::Sqrt => {
                ensure("sqrt", vec![non_negative("x", x)])?;
                x.sqrt()
            }
            Self::Square => x * x,
            Self::Cube => math::cube(x),
            Self::Cbrt => math::cube_root(x),
            Self::Abs => math::absolute(x),
            Self::Negate => -x,
            Self::Percent => x / 100.0,
            Self::Factorial => math::factorial(x)?,
            Self::Combination => return Ok(Evaluation::NeedsOperand(Selection::Combination)),
            Self::Permutation => return Ok(Evaluation::NeedsOperand(Selection::Permutation)),
        };
        Ok(Evaluation::Value(value))
    }

    /// History text for applying the function to `x`.
    pub fn expression(&self, x: f64) -> String {
        let x = render_number(x);
        match self {
            Self::Sin => format!("sin({x})"),
            Self::Cos => format!("cos({x})"),
            Self::Tan => format!("tan({x})"),
            Self::Asin => format!("arcsin({x})"),
            Self::Acos => format!("arccos({x})"),
            Self::Atan => format!("arctan({x})"),
            Self::Exp => format!("e^{x}"),
            Self::Ln => format!("ln({x})"),
            Self::Log => format!("log({x})"),
            Self::Sqrt => format!("√({x})"),
            Self::Square => format!("{x}²"),
            Self::Cube => format!("({x})³"),
            Self::Cbrt => format!("∛({x})"),
            Self::Abs => format!("|{x}|"),
            Self::Negate => format!("-({x})"),
            Self::Percent => format!("{x}%"),
            Self::Factorial => format!("{x}!"),
            Self::Combination => Selection::Combination.open_expression(&x),
            Self::Permutation => Selection::Permutation.open_expression(&x),
        }
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScientificFunction {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        match token {
            "arrangement" => return Ok(Self::Permutation),
            "combinaison" => return Ok(Self::Combination),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|function| function.name() == token)
            .ok_or_else(|| CalcError::UnknownToken {
                token: token.to_string(),
            })
    }
}

/// Choosing `k` items out of `n`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Unordered: `C(n, k)`
    Combination,
    /// Ordered: `P(n, k)`
    Permutation,
}

impl Selection {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Combination => "C",
            Self::Permutation => "P",
        }
    }

    pub fn function(&self) -> ScientificFunction {
        match self {
            Self::Combination => ScientificFunction::Combination,
            Self::Permutation => ScientificFunction::Permutation,
        }
    }

    pub fn apply(&self, n: f64, k: f64) -> Result<f64, DomainError> {
        match self {
            Self::Combination => math::combination(n, k),
            Self::Permutation => math::permutation(n, k),
        }
    }

    pub fn expression(&self, n: f64, k: f64) -> String {
        format!("{}({},{})", self.symbol(), render_number(n), render_number(k))
    }

    /// `C(n,k)` with `k` still unknown.
    fn open_expression(&self, n: &str) -> String {
        format!("{}({n},k)", self.symbol())
    }
}

/// A combination or permutation waiting for its `k` operand.
///
/// Returned by the engine so the UI can ask the user for `k` and hand the
/// answer back with `supply_operand`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OperandRequest {
    pub selection: Selection,
    /// The current operand at the time of the request
    pub n: f64,
}

impl OperandRequest {
    /// Text for asking the user for `k`.
    pub fn prompt(&self) -> String {
        format!(
            "Enter k for {}",
            self.selection.open_expression(&render_number(self.n))
        )
    }
}

/// Named constants that can replace the current operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Constant {
    Pi,
}

impl Constant {
    pub fn value(&self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
        }
    }
}

impl FromStr for Constant {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "pi" | "π" => Ok(Self::Pi),
            other => Err(CalcError::UnknownToken {
                token: other.to_string(),
            }),
        }
    }
}
