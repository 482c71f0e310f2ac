use crate::{
    ast::SetOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Returns whether a value can participate in set algebra.
const fn is_set_algebra(value: &Value) -> bool {
    matches!(value,
             Value::Interval(_) | Value::Set(_) | Value::Union(..) | Value::Intersection(..))
}

impl Context {
    /// Evaluates `union` and `intersection`.
    ///
    /// Two finite sets combine eagerly into a new set. Any other pairing of
    /// set-algebra values (intervals, or previously combined unions and
    /// intersections) stays symbolic and is queried through membership.
    ///
    /// # Parameters
    /// - `op`: The set operator.
    /// - `left`: Left operand, consumed.
    /// - `right`: Right operand, consumed.
    /// - `col`: Byte column for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the combined value.
    ///
    /// # Example
    /// ```
    /// use ami::{
    ///     ast::SetOperator,
    ///     interpreter::{evaluator::core::Context, value::{core::Value, set_value::SetValue}},
    /// };
    ///
    /// let a = Value::Set(SetValue::new(vec![1.0, 2.0]));
    /// let b = Value::Set(SetValue::new(vec![2.0, 3.0]));
    ///
    /// let result = Context::eval_set_op(SetOperator::Union, a, b, 1).unwrap();
    /// assert_eq!(result.to_string(), "{1, 2, 3}");
    /// ```
    pub fn eval_set_op(op: SetOperator, left: Value, right: Value, col: usize) -> EvalResult<Value> {
        if let (Value::Set(a), Value::Set(b)) = (&left, &right) {
            return Ok(match op {
                          SetOperator::Union => Value::Set(a.union(b)),
                          SetOperator::Intersection => Value::Set(a.intersection(b)),
                      });
        }

        for operand in [&left, &right] {
            if !is_set_algebra(operand) {
                return Err(RuntimeError::TypeError { details: format!("cannot use '{op}' on {}",
                                                                      operand.kind_name()),
                                                     col });
            }
        }

        Ok(match op {
               SetOperator::Union => Value::Union(Box::new(left), Box::new(right)),
               SetOperator::Intersection => Value::Intersection(Box::new(left), Box::new(right)),
           })
    }

    /// Evaluates the membership operator `in`.
    ///
    /// Numbers are tested against intervals, sets, and symbolic unions and
    /// intersections.
    ///
    /// # Parameters
    /// - `element`: The candidate element.
    /// - `container`: The container being queried.
    /// - `col`: Byte column for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    pub fn eval_membership(element: &Value, container: &Value, col: usize) -> EvalResult<Value> {
        match element {
            Value::Number(x) => Ok(Value::Bool(Self::number_in(*x, container, col)?)),

            // Sets hold only numbers, so no set is ever a member of another.
            Value::Set(_) if is_set_algebra(container) => Ok(Value::Bool(false)),

            _ => {
                Err(RuntimeError::TypeError { details: format!("cannot test membership of {}",
                                                               element.kind_name()),
                                              col })
            },
        }
    }

    /// Tests a number's membership, recursively unrolling symbolic unions
    /// (either side may contain it) and intersections (both sides must).
    fn number_in(x: f64, container: &Value, col: usize) -> EvalResult<bool> {
        match container {
            Value::Interval(interval) => Ok(interval.contains(x)),
            Value::Set(set) => Ok(set.contains(x)),
            Value::Union(left, right) => {
                Ok(Self::number_in(x, left, col)? || Self::number_in(x, right, col)?)
            },
            Value::Intersection(left, right) => {
                Ok(Self::number_in(x, left, col)? && Self::number_in(x, right, col)?)
            },
            _ => {
                Err(RuntimeError::TypeError { details: format!("cannot test membership in {}",
                                                               container.kind_name()),
                                              col })
            },
        }
    }
}
