//! Conversions between operand text and `f64`.

use crate::engine::CalcError;

/// Magnitude from which results are written in exponent form.
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which non-zero results are written in exponent form.
const EXPONENT_LOWER: f64 = 1e-6;

/// Parse operand text into a number.
///
/// Surrounding whitespace is ignored. Text that does not parse, or parses to
/// NaN, is a [`CalcError::Parse`].
///
/// ```rust
/// use tally::format::parse_operand;
///
/// assert_eq!(parse_operand("12.5").unwrap(), 12.5);
/// assert_eq!(parse_operand("5.").unwrap(), 5.0);
/// assert!(parse_operand("NaN").is_err());
/// assert!(parse_operand("").is_err());
/// ```
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    match text.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(CalcError::Parse {
            input: text.to_string(),
        }),
    }
}

/// Read the leading integer of `text`, ignoring anything after it.
///
/// `"3"`, `" 3 items"` and `"3.9"` all read as 3. Text without leading digits
/// reads as `None`.
///
/// ```rust
/// use tally::format::parse_integer_prefix;
///
/// assert_eq!(parse_integer_prefix("2.9"), Some(2.0));
/// assert_eq!(parse_integer_prefix("-4k"), Some(-4.0));
/// assert_eq!(parse_integer_prefix("k"), None);
/// ```
pub fn parse_integer_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: f64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Display text for a computed value.
///
/// Integers print without a fractional part, `-0` prints as `0`, non-finite
/// values print as `NaN`, `Infinity` and `-Infinity`, and very large or very
/// small magnitudes use exponent form with an explicit sign (`1e+21`,
/// `1e-7`).
///
/// ```rust
/// use tally::format::render_number;
///
/// assert_eq!(render_number(8.0), "8");
/// assert_eq!(render_number(0.25), "0.25");
/// assert_eq!(render_number(-0.0), "0");
/// assert_eq!(render_number(f64::INFINITY), "Infinity");
/// assert_eq!(render_number(1e21), "1e+21");
/// ```
pub fn render_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_results_and_entries() {
        assert_eq!(parse_operand("0").unwrap(), 0.0);
        assert_eq!(parse_operand("-3.25").unwrap(), -3.25);
        assert_eq!(parse_operand(".5").unwrap(), 0.5);
        assert_eq!(parse_operand("1e+21").unwrap(), 1e21);
        assert_eq!(parse_operand("Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_operand(" 7 ").unwrap(), 7.0);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            parse_operand("abc"),
            Err(CalcError::Parse {
                input: "abc".to_string()
            })
        );
        assert!(parse_operand(".").is_err());
    }

    #[test]
    fn integer_prefix_stops_at_first_non_digit() {
        assert_eq!(parse_integer_prefix("12"), Some(12.0));
        assert_eq!(parse_integer_prefix("  +7"), Some(7.0));
        assert_eq!(parse_integer_prefix("-"), None);
        assert_eq!(parse_integer_prefix(""), None);
        assert_eq!(parse_integer_prefix(".5"), None);
    }

    #[test]
    fn render_matches_display_conventions() {
        assert_eq!(render_number(120.0), "120");
        assert_eq!(render_number(-1.5), "-1.5");
        assert_eq!(render_number(0.3), "0.3");
        assert_eq!(render_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(render_number(f64::NAN), "NaN");
        assert_eq!(render_number(3_628_800.0), "3628800");
        assert_eq!(render_number(std::f64::consts::PI), "3.141592653589793");
    }

    #[test]
    fn render_uses_exponent_form_at_the_extremes() {
        assert_eq!(render_number(1.5e22), "1.5e+22");
        assert_eq!(render_number(-2e30), "-2e+30");
        assert_eq!(render_number(1e-10), "1e-10");
        assert_eq!(render_number(0.000001), "0.000001");
    }
}
