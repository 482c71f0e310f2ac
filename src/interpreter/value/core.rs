use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            interval::Interval,
            set_value::SetValue,
            tensor::{Matrix, Vector},
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.), logical
    /// operations, and membership tests.
    Bool(bool),
    /// The absent value, produced by `null` and by an `if` without a taken
    /// branch.
    Null,
    /// A contiguous range of numbers with open or closed endpoints.
    Interval(Interval),
    /// A finite set of unique numbers.
    Set(SetValue),
    /// A fixed-size numeric vector.
    Vector(Vector),
    /// A matrix of equal-length vector rows.
    Matrix(Matrix),
    /// A lazy union of two set-algebra values, queried through membership.
    Union(Box<Self>, Box<Self>),
    /// A lazy intersection of two set-algebra values, queried through
    /// membership.
    Intersection(Box<Self>, Box<Self>),
    /// A textual message, produced by assignments and function definitions.
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `col`: Byte column for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::TypeError)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use ami::interpreter::value::core::Value;
    ///
    /// let x = Value::Number(10.0);
    ///
    /// assert_eq!(x.as_number(42).unwrap(), 10.0);
    /// ```
    pub fn as_number(&self, col: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                self.kind_name()),
                                               col }),
        }
    }

    /// Converts the value to an `f64` for comparison purposes.
    ///
    /// Numbers convert to themselves and booleans to `1` or `0`, so the two
    /// types are interchangeable as comparison operands.
    ///
    /// # Parameters
    /// - `col`: Byte column for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: The comparable magnitude.
    /// - `Err(RuntimeError::TypeError)`: If the value is neither a number nor
    ///   a boolean.
    pub fn comparison_operand(&self, col: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Bool(b) => Ok(f64::from(*b)),
            _ => Err(RuntimeError::TypeError { details: format!("cannot compare {}",
                                                                self.kind_name()),
                                               col }),
        }
    }

    /// Coerces the value to a condition.
    ///
    /// Booleans are themselves, numbers are true when non-zero, text is true
    /// when non-empty, and `null` is false.
    ///
    /// # Parameters
    /// - `col`: Byte column for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The truth value.
    /// - `Err(RuntimeError::TypeError)`: If the value has no truthiness.
    pub fn truthy(&self, col: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Number(n) => Ok(*n != 0.0),
            Self::Text(t) => Ok(!t.is_empty()),
            Self::Null => Ok(false),
            _ => Err(RuntimeError::TypeError { details: format!("{} cannot be used as a condition",
                                                                self.kind_name()),
                                               col }),
        }
    }

    /// Returns a human-readable name for the value's type, used in error
    /// messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "a number",
            Self::Bool(_) => "a boolean",
            Self::Null => "null",
            Self::Interval(_) => "an interval",
            Self::Set(_) => "a set",
            Self::Vector(_) => "a vector",
            Self::Matrix(_) => "a matrix",
            Self::Union(..) => "a union",
            Self::Intersection(..) => "an intersection",
            Self::Text(_) => "text",
        }
    }

    /// Returns `true` if the value is [`Number`].
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => {
                if n.is_nan() {
                    write!(f, "nan")
                } else {
                    write!(f, "{n}")
                }
            },
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Interval(interval) => write!(f, "{interval}"),
            Self::Set(set) => write!(f, "{set}"),
            Self::Vector(vector) => write!(f, "{vector}"),
            Self::Matrix(matrix) => write!(f, "{matrix}"),
            Self::Union(left, right) => write!(f, "{left} union {right}"),
            Self::Intersection(left, right) => write!(f, "{left} intersection {right}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_reparseable() {
        let set = Value::Set(SetValue::new(vec![3.0, 1.0, 2.0]));
        assert_eq!(set.to_string(), "{1, 2, 3}");

        let interval = Value::Interval(Interval::new(0.0, true, 5.0, false, 0).unwrap());
        assert_eq!(interval.to_string(), "]0;5]");

        assert_eq!(Value::Number(f64::NAN).to_string(), "nan");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn truthiness_rules() {
        assert!(Value::Bool(true).truthy(0).unwrap());
        assert!(Value::Number(2.0).truthy(0).unwrap());
        assert!(!Value::Number(0.0).truthy(0).unwrap());
        assert!(!Value::Null.truthy(0).unwrap());
        assert!(Value::Text("x = 5".to_string()).truthy(0).unwrap());
        assert!(Value::Set(SetValue::new(vec![])).truthy(0).is_err());
    }
}
