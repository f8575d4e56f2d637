//! Builder API for creating engine configurations.

use crate::config::error::ConfigError;
use crate::config::CalculatorConfig;
use crate::core::AngleMode;

/// Builder for [`CalculatorConfig`].
///
/// # Example
///
/// ```rust
/// use tally::config::ConfigBuilder;
/// use tally::core::AngleMode;
///
/// let config = ConfigBuilder::new()
///     .history_capacity(50)
///     .precision(8)
///     .angle_mode(AngleMode::Radians)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.history_capacity, 50);
/// assert!(ConfigBuilder::new().history_capacity(0).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    config: CalculatorConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many calculations the history keeps
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Set how many decimal places results are rounded to
    pub fn precision(mut self, places: u32) -> Self {
        self.config.precision = places;
        self
    }

    /// Set the thousands separator used for display
    pub fn group_separator(mut self, separator: char) -> Self {
        self.config.group_separator = separator;
        self
    }

    /// Set the angle mode a new engine starts in
    pub fn angle_mode(mut self, mode: AngleMode) -> Self {
        self.config.angle_mode = mode;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<CalculatorConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
