use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Applies an arithmetic operator to two plain numbers.
///
/// Division by zero follows IEEE 754 semantics and produces an infinity or
/// `nan` rather than an error. Modulo is the truncated floating-point
/// remainder.
#[must_use]
pub fn apply_arithmetic(op: BinaryOperator, left: f64, right: f64) -> f64 {
    use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

    match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => left / right,
        Pow => left.powf(right),
        Mod => left % right,
    }
}

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation by operand types. Two numbers use
    /// plain arithmetic. `-` on two sets is set difference. `*` additionally
    /// handles vector scaling by a number on either side and the dot product
    /// of two vectors. Every other pairing is a type error.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `col`: Byte column for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use ami::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Number(3.0);
    /// let right = Value::Number(4.0);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       col: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Mul, Sub};
        use Value::{Number, Set, Vector};

        match (op, left, right) {
            (_, Number(a), Number(b)) => Ok(Number(apply_arithmetic(op, *a, *b))),

            (Sub, Set(a), Set(b)) => Ok(Set(a.difference(b))),

            (Mul, Number(factor), Vector(v)) | (Mul, Vector(v), Number(factor)) => {
                Ok(Vector(v.scale(*factor)))
            },
            (Mul, Vector(a), Vector(b)) => Ok(Number(a.dot(b, col)?)),

            _ => {
                Err(RuntimeError::TypeError { details: format!("cannot use '{op}' on {} and {}",
                                                               left.kind_name(),
                                                               right.kind_name()),
                                              col })
            },
        }
    }
}
