use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `u64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Parameters
/// - `value`: The unsigned integer to convert.
/// - `col`: Byte column for error reporting.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if safe.
/// - `Err(RuntimeError::Overflow { col })`: If the value is too large.
///
/// ## Example
/// ```
/// use ami::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// // Safe value
/// assert_eq!(u64_to_f64_checked(1234, 0).unwrap(), 1234.0);
///
/// // Unsafe value
/// assert!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1, 42).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn u64_to_f64_checked(value: u64, col: usize) -> EvalResult<f64> {
    if value > MAX_SAFE_U64_INT {
        return Err(RuntimeError::Overflow { col });
    }

    Ok(value as f64)
}

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within the exactly representable range, and not fractional.
///
/// ## Errors
/// Returns an error for non-finite, fractional, negative, or out-of-range
/// values.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `col`: Byte column for error reporting.
///
/// ## Returns
/// - `Ok(u64)`: The converted value if safe.
/// - `Err(RuntimeError::TypeError | Overflow)`: If conversion is invalid.
///
/// ## Example
/// ```
/// use ami::util::num::f64_to_u64_checked;
///
/// // Safe
/// assert_eq!(f64_to_u64_checked(7.0, 9).unwrap(), 7);
///
/// // Fractional value
/// assert!(f64_to_u64_checked(1.23, 11).is_err());
///
/// // Negative value
/// assert!(f64_to_u64_checked(-5.0, 10).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64, col: usize) -> EvalResult<u64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(RuntimeError::TypeError { details: format!("{value} is not a representable whole number"),
                                             col });
    }
    if value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return Err(RuntimeError::Overflow { col });
    }

    Ok(value as u64)
}

/// Safely converts an `f64` to a `usize` if and only if it can be
/// represented exactly.
///
/// ## Errors
/// Returns an error for non-finite, fractional, negative, or out-of-range
/// values.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `col`: Byte column for error reporting.
///
/// ## Returns
/// - `Ok(usize)`: The converted value if it is safe.
/// - `Err(RuntimeError::TypeError | Overflow)`: If conversion fails.
///
/// ## Example
/// ```
/// use ami::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(42.0, 0).unwrap(), 42);
/// assert!(f64_to_usize_checked(f64::INFINITY, 5).is_err());
/// ```
pub fn f64_to_usize_checked(value: f64, col: usize) -> EvalResult<usize> {
    let value = f64_to_u64_checked(value, col)?;

    usize::try_from(value).map_or(Err(RuntimeError::Overflow { col }), Ok)
}
