//! Display formatting for operands and results.
//!
//! The formatter only groups the integer part of a number; the fractional
//! part is shown exactly as entered or computed. Rounding happens earlier,
//! in the engine.

mod parse;

pub use parse::{parse_integer_prefix, parse_operand, render_number};

/// Default thousands separator.
pub const DEFAULT_GROUP_SEPARATOR: char = ' ';

/// Renders operand text with grouped thousands.
///
/// # Example
///
/// ```rust
/// use tally::format::NumberFormatter;
///
/// let formatter = NumberFormatter::default();
/// assert_eq!(formatter.format("1234567"), "1 234 567");
/// assert_eq!(formatter.format("1234.56789"), "1 234.56789");
/// assert_eq!(formatter.format("12."), "12.");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NumberFormatter {
    separator: char,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_SEPARATOR)
    }
}

impl NumberFormatter {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Format operand text for display.
    ///
    /// The integer part is grouped in thousands and stripped of redundant
    /// leading zeros. A non-numeric integer part renders as an empty string,
    /// except for `Infinity` and exponent forms, which pass through.
    pub fn format(&self, value: &str) -> String {
        let (integer, fraction) = match value.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (value, None),
        };

        let integer = self.group_integer(integer);
        match fraction {
            Some(fraction) => format!("{integer}.{fraction}"),
            None => integer,
        }
    }

    fn group_integer(&self, integer: &str) -> String {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", integer.strip_prefix('+').unwrap_or(integer)),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return if passes_through(integer) {
                integer.to_string()
            } else {
                String::new()
            };
        }

        let digits = match digits.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };

        let mut grouped = String::with_capacity(sign.len() + digits.len() * 4 / 3 + 1);
        grouped.push_str(sign);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

/// Infinite and exponent renderings are shown verbatim.
fn passes_through(text: &str) -> bool {
    match text.parse::<f64>() {
        Ok(value) => value.is_infinite() || text.contains(['e', 'E']),
        Err(_) => false,
    }
}
