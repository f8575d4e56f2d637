//! Engine configuration.
//!
//! Every setting has a default matching the usual calculator behavior, so
//! `CalculatorConfig::default()` is always valid. Settings can be adjusted
//! with [`ConfigBuilder`] or loaded from JSON, where missing keys fall back
//! to their defaults.
//!
//! # Example
//!
//! ```rust
//! use tally::config::CalculatorConfig;
//! use tally::core::AngleMode;
//!
//! let config = CalculatorConfig::from_json(r#"{ "angle_mode": "radians" }"#).unwrap();
//! assert_eq!(config.angle_mode, AngleMode::Radians);
//! assert_eq!(config.history_capacity, 20);
//! assert_eq!(config.precision, 10);
//! ```

pub mod builder;
pub mod error;

pub use builder::ConfigBuilder;
pub use error::ConfigError;

use crate::core::{AngleMode, DEFAULT_HISTORY_CAPACITY};
use crate::format::{NumberFormatter, DEFAULT_GROUP_SEPARATOR};
use serde::{Deserialize, Serialize};

/// Decimal places results are rounded to by default.
pub const DEFAULT_PRECISION: u32 = 10;

/// Largest supported rounding precision; `f64` carries about 15-17
/// significant digits.
pub const MAX_PRECISION: u32 = 15;

/// Settings for a [`CalculatorEngine`](crate::engine::CalculatorEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Number of calculations kept in the history
    pub history_capacity: usize,

    /// Decimal places results are rounded to
    pub precision: u32,

    /// Thousands separator for displayed operands
    pub group_separator: char,

    /// Angle mode a new engine starts in
    pub angle_mode: AngleMode,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            precision: DEFAULT_PRECISION,
            group_separator: DEFAULT_GROUP_SEPARATOR,
            angle_mode: AngleMode::default(),
        }
    }
}

impl CalculatorConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooHigh {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        let separator = self.group_separator;
        if separator.is_ascii_digit() || matches!(separator, '.' | '-' | '+') {
            return Err(ConfigError::InvalidSeparator(separator));
        }
        Ok(())
    }

    pub fn formatter(&self) -> NumberFormatter {
        NumberFormatter::new(self.group_separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.history_capacity, 20);
        assert_eq!(config.precision, 10);
        assert_eq!(config.group_separator, ' ');
        assert_eq!(config.angle_mode, AngleMode::Degrees);
    }

    #[test]
    fn builder_sets_every_field() {
        let config = CalculatorConfig::builder()
            .history_capacity(5)
            .precision(4)
            .group_separator(',')
            .angle_mode(AngleMode::Radians)
            .build()
            .unwrap();

        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.precision, 4);
        assert_eq!(config.formatter().format("1234"), "1,234");
        assert_eq!(config.angle_mode, AngleMode::Radians);
    }

    #[test]
    fn builder_rejects_invalid_settings() {
        assert_eq!(
            ConfigBuilder::new().history_capacity(0).build(),
            Err(ConfigError::ZeroHistoryCapacity)
        );
        assert_eq!(
            ConfigBuilder::new().precision(16).build(),
            Err(ConfigError::PrecisionTooHigh {
                precision: 16,
                max: MAX_PRECISION
            })
        );
        assert_eq!(
            ConfigBuilder::new().group_separator('.').build(),
            Err(ConfigError::InvalidSeparator('.'))
        );
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = CalculatorConfig::from_json(r#"{ "precision": 6 }"#).unwrap();
        assert_eq!(config.precision, 6);
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(
            CalculatorConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            CalculatorConfig::from_json(r#"{ "history_capacity": 0 }"#),
            Err(ConfigError::ZeroHistoryCapacity)
        );
    }
}
