use crate::{
    ast::LogicalOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a logical connective between two values.
    ///
    /// Both operands are always evaluated before this runs; there is no
    /// short-circuiting. Numbers and booleans are interchangeable, a number
    /// counting as true when non-zero.
    ///
    /// # Parameters
    /// - `op`: The logical operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `col`: Byte column for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Example
    /// ```
    /// use ami::{
    ///     ast::LogicalOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Bool(true);
    /// let b = Value::Number(0.0);
    ///
    /// let result = Context::eval_logical(LogicalOperator::Or, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_logical(op: LogicalOperator,
                        left: &Value,
                        right: &Value,
                        col: usize)
                        -> EvalResult<Value> {
        let left = left.comparison_operand(col)? != 0.0;
        let right = right.comparison_operand(col)? != 0.0;

        Ok(Value::Bool(match op {
                           LogicalOperator::And => left && right,
                           LogicalOperator::Or => left || right,
                       }))
    }
}
