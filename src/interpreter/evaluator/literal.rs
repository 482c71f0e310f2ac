use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            core::Value,
            interval::Interval,
            set_value::SetValue,
            tensor::{Matrix, Vector},
        },
    },
    util::num::f64_to_usize_checked,
};

impl Context {
    /// Evaluates an interval literal into an interval value.
    ///
    /// Endpoint expressions are evaluated first; validation of the resulting
    /// bounds happens in `Interval::new`.
    pub(crate) fn eval_interval(&mut self,
                                min: &Expr,
                                min_strict: bool,
                                max: &Expr,
                                max_strict: bool,
                                col: usize)
                                -> EvalResult<Value> {
        let min_value = self.eval(min)?.as_number(min.column())?;
        let max_value = self.eval(max)?.as_number(max.column())?;

        Ok(Value::Interval(Interval::new(min_value, min_strict, max_value, max_strict, col)?))
    }

    /// Evaluates a set literal. Every element must evaluate to a number;
    /// duplicates collapse and the members are kept sorted.
    pub(crate) fn eval_set_literal(&mut self, elements: &[Rc<Expr>]) -> EvalResult<Value> {
        let mut members = Vec::with_capacity(elements.len());
        for element in elements {
            match self.eval(element)? {
                Value::Number(n) => members.push(n),
                other => {
                    return Err(RuntimeError::TypeError { details: format!("a set may only contain numbers, found {}",
                                                                          other.kind_name()),
                                                         col:     element.column(), });
                },
            }
        }

        Ok(Value::Set(SetValue::new(members)))
    }

    /// Evaluates a bracket literal into a vector or matrix.
    ///
    /// A non-empty run of numbers becomes a vector, a non-empty run of
    /// vectors becomes a matrix, and anything else is a type error.
    pub(crate) fn eval_tensor_literal(&mut self,
                                      elements: &[Rc<Expr>],
                                      col: usize)
                                      -> EvalResult<Value> {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(self.eval(element)?);
        }

        if values.is_empty() {
            return Err(RuntimeError::TypeError { details: "empty brackets form neither a vector nor a matrix".to_string(),
                                                 col });
        }

        if values.iter().all(Value::is_number) {
            let mut components = Vec::with_capacity(values.len());
            for value in &values {
                components.push(value.as_number(col)?);
            }

            return Ok(Value::Vector(Vector::new(components, col)?));
        }

        let mut rows = Vec::with_capacity(values.len());
        for value in values {
            match value {
                Value::Vector(row) => rows.push(row),
                other => {
                    return Err(RuntimeError::TypeError { details: format!("brackets may contain numbers or vector rows, found {}",
                                                                          other.kind_name()),
                                                         col });
                },
            }
        }

        Ok(Value::Matrix(Matrix::new(rows, col)?))
    }

    /// Evaluates an indexing expression. Only sets support indexing, by
    /// ascending zero-based position.
    ///
    /// # Errors
    /// - `TypeError` for non-set targets or non-integral indices.
    /// - `IndexOutOfBounds` for positions past the end of the set.
    pub(crate) fn eval_index(target: &Value, index: &Value, col: usize) -> EvalResult<Value> {
        let Value::Set(set) = target else {
            return Err(RuntimeError::TypeError { details: format!("only sets can be indexed, found {}",
                                                                  target.kind_name()),
                                                 col });
        };

        let position = index.as_number(col)?;
        if position < 0.0 || position.fract() != 0.0 {
            return Err(RuntimeError::TypeError { details: format!("a set index must be a non-negative whole number, found {position}"),
                                                 col });
        }

        let position = f64_to_usize_checked(position, col)?;
        set.get(position)
           .map(Value::Number)
           .ok_or(RuntimeError::IndexOutOfBounds { len: set.len(),
                                                   found: position,
                                                   col })
    }
}
