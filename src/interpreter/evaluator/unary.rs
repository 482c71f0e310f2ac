use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{f64_to_u64_checked, u64_to_f64_checked},
};

impl Context {
    /// Evaluates arithmetic negation. Only numbers can be negated.
    ///
    /// # Parameters
    /// - `value`: The operand.
    /// - `col`: Byte column for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the negated number.
    pub fn eval_negate(value: &Value, col: usize) -> EvalResult<Value> {
        match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => {
                Err(RuntimeError::TypeError { details: format!("cannot negate {}",
                                                               value.kind_name()),
                                              col })
            },
        }
    }

    /// Evaluates logical NOT using the operand's truthiness, so `not 0` and
    /// `not null` are both `true`.
    ///
    /// # Errors
    /// Returns a `TypeError` for operands without a truth value.
    pub fn eval_not(value: &Value, col: usize) -> EvalResult<Value> {
        Ok(Value::Bool(!value.truthy(col)?))
    }

    /// Evaluates the postfix factorial.
    ///
    /// The operand must be a non-negative whole number. The product is
    /// computed in checked integer arithmetic and converted back while it
    /// remains exactly representable.
    ///
    /// # Errors
    /// - `TypeError` for negative or fractional operands.
    /// - `Overflow` when the result leaves exact integer range.
    ///
    /// # Example
    /// ```
    /// use ami::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_factorial(&Value::Number(5.0), 1);
    /// assert_eq!(result.unwrap(), Value::Number(120.0));
    /// ```
    pub fn eval_factorial(value: &Value, col: usize) -> EvalResult<Value> {
        let x = value.as_number(col)?;
        if x < 0.0 || x.fract() != 0.0 {
            return Err(RuntimeError::TypeError { details: format!("factorial is only defined for non-negative whole numbers, found {x}"),
                                                 col });
        }

        let n = f64_to_u64_checked(x, col)?;
        let product = (2..=n).try_fold(1_u64, |acc, factor| {
                                 acc.checked_mul(factor)
                                    .ok_or(RuntimeError::Overflow { col })
                             })?;

        Ok(Value::Number(u64_to_f64_checked(product, col)?))
    }
}
