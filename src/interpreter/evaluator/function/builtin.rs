use rand::Rng;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Looks up a built-in constant by name.
///
/// # Returns
/// The constant's value, or `None` if the name is not a built-in constant.
///
/// # Example
/// ```
/// use ami::interpreter::evaluator::function::builtin::constant;
///
/// assert_eq!(constant("pi"), Some(std::f64::consts::PI));
/// assert_eq!(constant("x"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "tau" => Some(std::f64::consts::TAU),
        "e" => Some(std::f64::consts::E),
        "inf" => Some(f64::INFINITY),
        "nan" => Some(f64::NAN),
        _ => None,
    }
}

/// Computes the greatest common divisor of two magnitudes using the
/// Euclidean algorithm on floating-point remainders.
///
/// Whole-number inputs give the familiar integer gcd; fractional inputs are
/// handled the same way, since IEEE remainders are exact.
///
/// # Parameters
/// - `args`: Slice containing the two operands.
/// - `col`: Byte column for error reporting (unused, gcd cannot fail).
pub(crate) fn gcd(args: &[f64], _col: usize) -> EvalResult<f64> {
    Ok(euclid(args[0].abs(), args[1].abs()))
}

fn euclid(x: f64, y: f64) -> f64 {
    if y == 0.0 || y.is_nan() {
        x
    } else {
        euclid(y, x % y)
    }
}

/// Computes the least common multiple from the product and the gcd.
///
/// `lcm(x, 0)` is `0`.
pub(crate) fn lcm(args: &[f64], col: usize) -> EvalResult<f64> {
    let divisor = gcd(args, col)?;
    if divisor == 0.0 {
        return Ok(0.0);
    }

    Ok((args[0] * args[1] / divisor).abs())
}

/// Draws a uniformly distributed number from the half-open range
/// `[min, max)`.
///
/// Equal bounds return that bound directly.
///
/// # Errors
/// Returns a `TypeError` if a bound is not finite or the bounds are out of
/// order.
pub(crate) fn random(args: &[f64], col: usize) -> EvalResult<f64> {
    let (min, max) = (args[0], args[1]);

    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(RuntimeError::TypeError { details: format!("random bounds must be finite and ordered, found {min} and {max}"),
                                             col });
    }
    if min == max {
        return Ok(min);
    }

    Ok(rand::rng().random_range(min..max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_of_whole_numbers() {
        assert_eq!(gcd(&[12.0, 18.0], 0).unwrap(), 6.0);
        assert_eq!(gcd(&[7.0, 13.0], 0).unwrap(), 1.0);
        assert_eq!(gcd(&[0.0, 5.0], 0).unwrap(), 5.0);
    }

    #[test]
    fn lcm_of_whole_numbers() {
        assert_eq!(lcm(&[4.0, 6.0], 0).unwrap(), 12.0);
        assert_eq!(lcm(&[0.0, 5.0], 0).unwrap(), 0.0);
    }

    #[test]
    fn random_stays_within_bounds() {
        for _ in 0..100 {
            let drawn = random(&[2.0, 3.0], 0).unwrap();
            assert!((2.0..3.0).contains(&drawn));
        }
        assert_eq!(random(&[5.0, 5.0], 0).unwrap(), 5.0);
    }

    #[test]
    fn random_rejects_unusable_bounds() {
        assert!(random(&[3.0, 2.0], 0).is_err());
        assert!(random(&[f64::NEG_INFINITY, 0.0], 0).is_err());
        assert!(random(&[f64::NAN, 1.0], 0).is_err());
    }
}
