//! Pure numeric functions used by the engine.
//!
//! Every function here is either total or fails with a [`DomainError`]
//! naming all violated conditions. Results follow `f64` semantics: values
//! past the representable range overflow to infinity rather than failing.

pub mod domain;

pub use domain::{DomainError, DomainViolation};

use domain::{ensure, integral, non_negative, selection_within_pool};

/// Magnitude from which every `f64` is already an integer.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0; // 2^52

/// `x` for non-negative input, `-x` otherwise.
pub fn absolute(x: f64) -> f64 {
    if x >= 0.0 {
        x
    } else {
        -x
    }
}

/// Real cube root, defined for negative input too.
pub fn cube_root(x: f64) -> f64 {
    x.cbrt()
}

pub fn cube(x: f64) -> f64 {
    x * x * x
}

/// Raise `base` to `exponent`.
///
/// Non-negative integer exponents use repeated multiplication (by squaring),
/// which is exact for integer bases while the result fits the mantissa. Any
/// other exponent goes through `powf`, so a negative base with a fractional
/// exponent yields NaN.
///
/// ```rust
/// use tally::math::integer_power;
///
/// assert_eq!(integer_power(3.0, 4.0), 81.0);
/// assert_eq!(integer_power(4.0, 0.5), 2.0);
/// assert!(integer_power(-8.0, 1.0 / 3.0).is_nan());
/// ```
pub fn integer_power(base: f64, exponent: f64) -> f64 {
    if !domain::is_integer(exponent) || exponent < 0.0 || exponent > u64::MAX as f64 {
        return base.powf(exponent);
    }

    let mut remaining = exponent as u64;
    let mut factor = base;
    let mut result = 1.0;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= factor;
        }
        remaining >>= 1;
        if remaining > 0 {
            factor *= factor;
        }
    }
    result
}

/// `n!` for non-negative integers.
///
/// Overflows to `+∞` past `170!`.
///
/// ```rust
/// use tally::math::factorial;
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert!(factorial(-1.0).is_err());
/// assert!(factorial(2.5).is_err());
/// ```
pub fn factorial(n: f64) -> Result<f64, DomainError> {
    ensure("factorial", vec![non_negative("n", n), integral("n", n)])?;
    Ok(falling_product(n, n))
}

/// Ordered selections `P(n, k) = n! / (n - k)!`.
pub fn permutation(n: f64, k: f64) -> Result<f64, DomainError> {
    ensure("permutation", selection_checks(n, k))?;
    Ok(falling_product(n, k))
}

/// Unordered selections `C(n, k) = n! / (k! (n - k)!)`.
pub fn combination(n: f64, k: f64) -> Result<f64, DomainError> {
    ensure("combination", selection_checks(n, k))?;

    let k = k.min(n - k);
    let mut result = 1.0;
    let mut i = 1.0;
    while i <= k {
        // C(n - k + i, i) is integral at every step
        result = result * (n - k + i) / i;
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    Ok(result)
}

/// Round to `places` decimals, halves toward positive infinity.
///
/// ```rust
/// use tally::math::round_to;
///
/// assert_eq!(round_to(0.1 + 0.2, 10), 0.3);
/// assert_eq!(round_to(-2.5, 0), -2.0);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() || absolute(value) >= INTEGRAL_THRESHOLD {
        return value;
    }
    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / scale
}

fn selection_checks(n: f64, k: f64) -> Vec<domain::DomainCheck> {
    vec![
        non_negative("k", k),
        integral("n", n),
        integral("k", k),
        selection_within_pool(n, k),
    ]
}

/// `n · (n-1) · … · (n-count+1)`, stopping once the product is infinite.
fn falling_product(n: f64, count: f64) -> f64 {
    // Counted steps: past 2^53, `n - count` can round back to `n`.
    let mut result = 1.0;
    let mut step = 0.0;
    while step < count && n - step > 1.0 {
        result *= n - step;
        if result.is_infinite() {
            break;
        }
        step += 1.0;
    }
    result
}
