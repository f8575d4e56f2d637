//! Domain validation for numeric functions.
//!
//! Checks return `Validation` so that every violated condition of a call is
//! reported together instead of stopping at the first one.

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Outcome of a single domain check.
pub type DomainCheck = Validation<(), NonEmptyVec<DomainViolation>>;

/// A single violated domain condition.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainViolation {
    #[error("{name} = {value} is negative")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} = {value} is not an integer")]
    NotInteger { name: &'static str, value: f64 },

    #[error("{name} = {value} must be greater than zero")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} = {value} is outside [-1, 1]")]
    OutsideUnitInterval { name: &'static str, value: f64 },

    #[error("k = {k} is greater than n = {n}")]
    SelectionExceedsPool { n: f64, k: f64 },
}

/// A function was called outside its domain.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{operation}: {}", describe(.violations))]
pub struct DomainError {
    /// Name of the rejected operation, e.g. `factorial`
    pub operation: &'static str,
    /// Every condition the arguments violated
    pub violations: Vec<DomainViolation>,
}

impl DomainError {
    pub fn new(operation: &'static str, violation: DomainViolation) -> Self {
        Self {
            operation,
            violations: vec![violation],
        }
    }
}

fn describe(violations: &[DomainViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// True for finite values without a fractional part.
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

pub fn non_negative(name: &'static str, value: f64) -> DomainCheck {
    if value < 0.0 {
        Validation::fail(DomainViolation::Negative { name, value })
    } else {
        Validation::success(())
    }
}

pub fn integral(name: &'static str, value: f64) -> DomainCheck {
    if is_integer(value) {
        Validation::success(())
    } else {
        Validation::fail(DomainViolation::NotInteger { name, value })
    }
}

pub fn positive(name: &'static str, value: f64) -> DomainCheck {
    if value > 0.0 {
        Validation::success(())
    } else {
        Validation::fail(DomainViolation::NotPositive { name, value })
    }
}

pub fn within_unit_interval(name: &'static str, value: f64) -> DomainCheck {
    if (-1.0..=1.0).contains(&value) {
        Validation::success(())
    } else {
        Validation::fail(DomainViolation::OutsideUnitInterval { name, value })
    }
}

/// `k` may not exceed `n` when choosing `k` items out of `n`.
pub fn selection_within_pool(n: f64, k: f64) -> DomainCheck {
    if k > n {
        Validation::fail(DomainViolation::SelectionExceedsPool { n, k })
    } else {
        Validation::success(())
    }
}

/// Run all checks, accumulating every violation into one error.
pub fn ensure(operation: &'static str, checks: Vec<DomainCheck>) -> Result<(), DomainError> {
    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(violations) => Err(DomainError {
            operation,
            violations: violations.iter().cloned().collect(),
        }),
    }
}
