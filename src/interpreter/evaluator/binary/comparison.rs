use crate::{
    ast::ComparisonOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Two sets support only equality and inequality, which compare their
    /// (canonically sorted) members. All other comparisons work on numbers,
    /// with booleans counting as `1` and `0`, so the two types are
    /// interchangeable. `nan` compares unequal to everything, including
    /// itself.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `col`: Byte column for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use ami::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Context::eval_comparison(ComparisonOperator::Less, &a, &b, 1);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &Value,
                           right: &Value,
                           col: usize)
                           -> EvalResult<Value> {
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        if let (Value::Set(a), Value::Set(b)) = (left, right) {
            return match op {
                Equal => Ok(Value::Bool(a == b)),
                NotEqual => Ok(Value::Bool(a != b)),
                _ => {
                    Err(RuntimeError::TypeError { details: format!("cannot use '{op}' on two sets"),
                                                  col })
                },
            };
        }

        let left = left.comparison_operand(col)?;
        let right = right.comparison_operand(col)?;

        Ok(Value::Bool(match op {
                           Less => left < right,
                           Greater => left > right,
                           LessEqual => left <= right,
                           GreaterEqual => left >= right,
                           Equal => left == right,
                           NotEqual => left != right,
                       }))
    }
}
