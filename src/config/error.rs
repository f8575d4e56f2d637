//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when building or loading a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("History capacity must hold at least one entry")]
    ZeroHistoryCapacity,

    #[error("Precision of {precision} decimal places exceeds the maximum of {max}")]
    PrecisionTooHigh { precision: u32, max: u32 },

    #[error("Group separator must not be a digit, sign or decimal point (got {0:?})")]
    InvalidSeparator(char),

    #[error("Configuration could not be parsed: {0}")]
    Parse(String),
}
