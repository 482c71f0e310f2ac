use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// A contiguous range of real numbers with independently open or closed
/// endpoints.
///
/// `[0;5]` includes both endpoints, `]0;5[` excludes both, and the two mixed
/// forms exclude exactly one. Intervals are validated on construction: the
/// lower endpoint may not exceed the upper one, and an infinite endpoint must
/// be strict, since no interval can contain infinity itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// The lower endpoint.
    pub min:        f64,
    /// Whether the lower endpoint is excluded.
    pub min_strict: bool,
    /// The upper endpoint.
    pub max:        f64,
    /// Whether the upper endpoint is excluded.
    pub max_strict: bool,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// # Errors
    /// - `InvalidInterval` if `min > max`, if either endpoint is `nan`, or if
    ///   an infinite endpoint is marked as included.
    ///
    /// # Example
    /// ```
    /// use ami::interpreter::value::interval::Interval;
    ///
    /// let interval = Interval::new(0.0, false, 5.0, true, 0).unwrap();
    ///
    /// assert!(interval.contains(0.0));
    /// assert!(!interval.contains(5.0));
    /// ```
    pub fn new(min: f64, min_strict: bool, max: f64, max_strict: bool, col: usize)
               -> EvalResult<Self> {
        if min.is_nan() || max.is_nan() {
            return Err(RuntimeError::InvalidInterval { details: "endpoints cannot be nan".to_string(),
                                                       col });
        }
        if min > max {
            return Err(RuntimeError::InvalidInterval { details: format!("lower endpoint {min} exceeds upper endpoint {max}"),
                                                       col });
        }
        if min.is_infinite() && !min_strict || max.is_infinite() && !max_strict {
            return Err(RuntimeError::InvalidInterval { details: "an infinite endpoint must be open".to_string(),
                                                       col });
        }

        Ok(Self { min,
                  min_strict,
                  max,
                  max_strict })
    }

    /// Returns whether `x` lies within the interval, honoring endpoint
    /// strictness.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        let above_min = if self.min_strict { x > self.min } else { x >= self.min };
        let below_max = if self.max_strict { x < self.max } else { x <= self.max };

        above_min && below_max
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{}{};{}{}",
               if self.min_strict { ']' } else { '[' },
               self.min,
               self.max,
               if self.max_strict { '[' } else { ']' })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_endpoints_are_included() {
        let interval = Interval::new(0.0, false, 10.0, false, 0).unwrap();

        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn open_endpoints_are_excluded() {
        let interval = Interval::new(5.0, true, 10.0, false, 0).unwrap();

        assert!(!interval.contains(5.0));
        assert!(interval.contains(5.0001));
        assert!(interval.contains(10.0));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(Interval::new(5.0, false, 1.0, false, 0).is_err());
    }

    #[test]
    fn closed_infinite_endpoint_is_rejected() {
        assert!(Interval::new(0.0, false, f64::INFINITY, false, 0).is_err());
        assert!(Interval::new(0.0, false, f64::INFINITY, true, 0).is_ok());
    }

    #[test]
    fn display_round_trips_strictness() {
        let interval = Interval::new(0.0, true, 5.0, false, 0).unwrap();

        assert_eq!(interval.to_string(), "]0;5]");
    }
}
